//! HTTP routes for programme progress and notification endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    get_program_overview, get_segment_detail, list_notifications, record_completion,
    reset_progress, ProgressHandlers,
};

/// Creates the progress router with all endpoints.
pub fn progress_routes(handlers: ProgressHandlers) -> Router {
    Router::new()
        .route("/api/program", get(get_program_overview))
        .route("/api/program/segments/:segment_id", get(get_segment_detail))
        .route(
            "/api/program/completions/:activity_id",
            post(record_completion),
        )
        .route("/api/program/completions", delete(reset_progress))
        .route("/api/notifications", get(list_notifications))
        .with_state(handlers)
}
