//! HTTP routes for routine endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    create_routine, delete_routine, list_routines, reset_routine_days, toggle_routine_day,
    RoutineHandlers,
};

/// Creates the routine router; nest it under `/api/routines`.
pub fn routine_routes(handlers: RoutineHandlers) -> Router {
    Router::new()
        .route("/", get(list_routines).post(create_routine))
        .route("/:id", delete(delete_routine))
        .route("/:id/days/:day/toggle", post(toggle_routine_day))
        .route("/:id/reset", post(reset_routine_days))
        .with_state(handlers)
}
