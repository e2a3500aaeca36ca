//! HTTP DTOs for programme progress and notification endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::progress::{
    GetProgramOverviewResult, RecordCompletionResult, ResetProgressResult, StreakStats,
};
use crate::domain::foundation::SegmentState;
use crate::domain::notification::{Notification, NotificationKind};
use crate::domain::progression::{
    ActivityStatus, ProgramOverview, ProgramProgress, SegmentDetail, SegmentSummary,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for `DELETE /api/program/completions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetProgressParams {
    #[serde(default)]
    pub segment_id: Option<String>,
}

/// Query parameters for `GET /api/notifications`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationsParams {
    #[serde(default)]
    pub limit: Option<usize>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub completed_count: usize,
    pub total_count: usize,
    pub percent: u8,
}

impl From<ProgramProgress> for ProgressResponse {
    fn from(progress: ProgramProgress) -> Self {
        Self {
            completed_count: progress.completed_count,
            total_count: progress.total_count,
            percent: progress.percent.value(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentSummaryResponse {
    pub id: String,
    pub index: usize,
    pub number: usize,
    pub title: String,
    pub state: SegmentState,
    pub completed_activities: usize,
    pub total_activities: usize,
}

impl From<SegmentSummary> for SegmentSummaryResponse {
    fn from(summary: SegmentSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            index: summary.index,
            number: summary.number,
            title: summary.title,
            state: summary.state,
            completed_activities: summary.completed_activities,
            total_activities: summary.total_activities,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DayActivityResponse {
    pub date: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StreakResponse {
    pub current_streak: u32,
    pub recent_activity: Vec<DayActivityResponse>,
}

impl From<StreakStats> for StreakResponse {
    fn from(stats: StreakStats) -> Self {
        Self {
            current_streak: stats.current_streak,
            recent_activity: stats
                .recent_activity
                .into_iter()
                .map(|day| DayActivityResponse {
                    date: day.date.format("%Y-%m-%d").to_string(),
                    active: day.active,
                })
                .collect(),
        }
    }
}

/// Whole-programme view.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramOverviewResponse {
    pub segments: Vec<SegmentSummaryResponse>,
    pub progress: ProgressResponse,
    pub current_segment_id: Option<String>,
    pub trained_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak: Option<StreakResponse>,
}

impl From<ProgramOverview> for ProgramOverviewResponse {
    fn from(overview: ProgramOverview) -> Self {
        Self {
            segments: overview.segments.into_iter().map(Into::into).collect(),
            progress: overview.progress.into(),
            current_segment_id: overview.current_segment_id.map(|id| id.to_string()),
            trained_seconds: overview.trained_seconds,
            streak: None,
        }
    }
}

impl From<GetProgramOverviewResult> for ProgramOverviewResponse {
    fn from(result: GetProgramOverviewResult) -> Self {
        Self {
            streak: Some(result.streak.into()),
            ..result.overview.into()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityStatusResponse {
    pub id: String,
    pub ordinal: u32,
    pub title: String,
    pub duration_seconds: u32,
    pub completed: bool,
}

impl From<ActivityStatus> for ActivityStatusResponse {
    fn from(activity: ActivityStatus) -> Self {
        Self {
            id: activity.id.to_string(),
            ordinal: activity.ordinal,
            title: activity.title,
            duration_seconds: activity.duration_seconds,
            completed: activity.completed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentDetailResponse {
    pub id: String,
    pub index: usize,
    pub number: usize,
    pub title: String,
    pub state: SegmentState,
    pub activities: Vec<ActivityStatusResponse>,
    pub next_segment_id: Option<String>,
}

impl From<SegmentDetail> for SegmentDetailResponse {
    fn from(detail: SegmentDetail) -> Self {
        Self {
            id: detail.id.to_string(),
            index: detail.index,
            number: detail.number,
            title: detail.title,
            state: detail.state,
            activities: detail.activities.into_iter().map(Into::into).collect(),
            next_segment_id: detail.next_segment_id.map(|id| id.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordCompletionResponse {
    pub activity_id: String,
    pub recorded: bool,
    pub just_completed_segment_ids: Vec<String>,
    pub unlocked_segment_ids: Vec<String>,
    pub overview: ProgramOverviewResponse,
}

impl RecordCompletionResponse {
    pub fn new(activity_id: String, result: RecordCompletionResult) -> Self {
        Self {
            activity_id,
            recorded: result.outcome.recorded,
            just_completed_segment_ids: result
                .outcome
                .just_completed_segment_ids
                .iter()
                .map(ToString::to_string)
                .collect(),
            unlocked_segment_ids: result
                .outcome
                .unlocked_segment_ids
                .iter()
                .map(ToString::to_string)
                .collect(),
            overview: result.overview.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetProgressResponse {
    pub removed: usize,
    pub overview: ProgramOverviewResponse,
}

impl From<ResetProgressResult> for ResetProgressResponse {
    fn from(result: ResetProgressResult) -> Self {
        Self {
            removed: result.removed,
            overview: result.overview.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    #[serde(flatten)]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: String,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            kind: notification.kind,
            title: notification.title,
            message: notification.message,
            created_at: notification.created_at.as_datetime().to_rfc3339(),
        }
    }
}
