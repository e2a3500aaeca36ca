//! HTTP adapters - REST API implementations.
//!
//! Each domain area has its own HTTP adapter; [`api_router`] assembles them.

pub mod error;
pub mod middleware;
pub mod progress;
pub mod routines;

use axum::Router;

pub use error::{domain_error_response, ErrorResponse};
pub use progress::{progress_routes, ProgressHandlers};
pub use routines::{routine_routes, RoutineHandlers};

/// Full JSON API without transport layers (tracing, CORS, timeouts).
pub fn api_router(progress: ProgressHandlers, routines: RoutineHandlers) -> Router {
    Router::new()
        .merge(progress_routes(progress))
        .nest("/api/routines", routine_routes(routines))
}
