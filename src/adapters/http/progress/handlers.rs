//! HTTP handlers for programme progress and notification endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireUser;
use crate::application::handlers::progress::{
    GetProgramOverviewHandler, GetProgramOverviewQuery, GetSegmentDetailHandler,
    GetSegmentDetailQuery, ListNotificationsHandler, ListNotificationsQuery,
    RecordCompletionCommand, RecordCompletionHandler, ResetProgressCommand, ResetProgressHandler,
    DEFAULT_NOTIFICATION_LIMIT,
};
use crate::domain::foundation::{ActivityId, DomainError, SegmentId, Timestamp};

use super::dto::{
    NotificationResponse, NotificationsParams, ProgramOverviewResponse, RecordCompletionResponse,
    ResetProgressParams, ResetProgressResponse, SegmentDetailResponse,
};

/// Upper bound for `?limit=` on the notification feed.
const MAX_NOTIFICATION_LIMIT: usize = 100;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProgressHandlers {
    record_handler: Arc<RecordCompletionHandler>,
    reset_handler: Arc<ResetProgressHandler>,
    overview_handler: Arc<GetProgramOverviewHandler>,
    segment_handler: Arc<GetSegmentDetailHandler>,
    notifications_handler: Arc<ListNotificationsHandler>,
}

impl ProgressHandlers {
    pub fn new(
        record_handler: Arc<RecordCompletionHandler>,
        reset_handler: Arc<ResetProgressHandler>,
        overview_handler: Arc<GetProgramOverviewHandler>,
        segment_handler: Arc<GetSegmentDetailHandler>,
        notifications_handler: Arc<ListNotificationsHandler>,
    ) -> Self {
        Self {
            record_handler,
            reset_handler,
            overview_handler,
            segment_handler,
            notifications_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/program - Overview with streak statistics
pub async fn get_program_overview(
    State(handlers): State<ProgressHandlers>,
    RequireUser(user_id): RequireUser,
) -> Response {
    let query = GetProgramOverviewQuery {
        user_id,
        today: Timestamp::now().date(),
    };

    match handlers.overview_handler.handle(query).await {
        Ok(result) => {
            let response: ProgramOverviewResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/program/segments/:segment_id - One week's detail
pub async fn get_segment_detail(
    State(handlers): State<ProgressHandlers>,
    RequireUser(user_id): RequireUser,
    Path(segment_id): Path<String>,
) -> Response {
    let segment_id = match segment_id.parse::<SegmentId>() {
        Ok(id) => id,
        Err(e) => return domain_error_response(e.into()),
    };

    let query = GetSegmentDetailQuery { user_id, segment_id };

    match handlers.segment_handler.handle(query).await {
        Ok(detail) => {
            let response: SegmentDetailResponse = detail.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/program/completions/:activity_id - Record a completed activity
pub async fn record_completion(
    State(handlers): State<ProgressHandlers>,
    RequireUser(user_id): RequireUser,
    Path(activity_id): Path<String>,
) -> Response {
    let activity_id = match activity_id.parse::<ActivityId>() {
        Ok(id) => id,
        Err(e) => return domain_error_response(e.into()),
    };

    let cmd = RecordCompletionCommand {
        user_id,
        activity_id: activity_id.clone(),
        on: Timestamp::now().date(),
    };

    match handlers.record_handler.handle(cmd).await {
        Ok(result) => {
            let status = if result.outcome.recorded {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            let response = RecordCompletionResponse::new(activity_id.to_string(), result);
            (status, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/program/completions?segment_id= - Reset progress
pub async fn reset_progress(
    State(handlers): State<ProgressHandlers>,
    RequireUser(user_id): RequireUser,
    Query(params): Query<ResetProgressParams>,
) -> Response {
    let segment_id = match params
        .segment_id
        .map(|id| id.parse::<SegmentId>())
        .transpose()
    {
        Ok(id) => id,
        Err(e) => return domain_error_response(DomainError::from(e)),
    };

    let cmd = ResetProgressCommand { user_id, segment_id };

    match handlers.reset_handler.handle(cmd).await {
        Ok(result) => {
            let response: ResetProgressResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/notifications - Notification feed, newest first
pub async fn list_notifications(
    State(handlers): State<ProgressHandlers>,
    RequireUser(user_id): RequireUser,
    Query(params): Query<NotificationsParams>,
) -> Response {
    let query = ListNotificationsQuery {
        user_id,
        limit: params
            .limit
            .unwrap_or(DEFAULT_NOTIFICATION_LIMIT)
            .min(MAX_NOTIFICATION_LIMIT),
    };

    match handlers.notifications_handler.handle(query).await {
        Ok(notifications) => {
            let response: Vec<NotificationResponse> =
                notifications.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
