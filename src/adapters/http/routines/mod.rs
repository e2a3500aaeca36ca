//! HTTP adapter for routine endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateRoutineRequest, RoutineResponse};
pub use handlers::RoutineHandlers;
pub use routes::routine_routes;
