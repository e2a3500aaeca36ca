//! HTTP adapter for programme progress and notification endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    NotificationResponse, ProgramOverviewResponse, RecordCompletionResponse,
    ResetProgressResponse, SegmentDetailResponse,
};
pub use handlers::ProgressHandlers;
pub use routes::progress_routes;
