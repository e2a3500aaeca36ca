//! HTTP handlers for routine endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireUser;
use crate::application::handlers::routine::{
    CreateRoutineCommand, CreateRoutineHandler, DeleteRoutineCommand, DeleteRoutineHandler,
    ListRoutinesHandler, ListRoutinesQuery, ResetRoutineDaysCommand, ResetRoutineDaysHandler,
    ToggleRoutineDayCommand, ToggleRoutineDayHandler,
};
use crate::domain::foundation::RoutineId;
use crate::domain::routine::{NewRoutine, TrainingDay};

use super::dto::{CreateRoutineRequest, RoutineResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RoutineHandlers {
    create_handler: Arc<CreateRoutineHandler>,
    list_handler: Arc<ListRoutinesHandler>,
    toggle_handler: Arc<ToggleRoutineDayHandler>,
    reset_handler: Arc<ResetRoutineDaysHandler>,
    delete_handler: Arc<DeleteRoutineHandler>,
}

impl RoutineHandlers {
    pub fn new(
        create_handler: Arc<CreateRoutineHandler>,
        list_handler: Arc<ListRoutinesHandler>,
        toggle_handler: Arc<ToggleRoutineDayHandler>,
        reset_handler: Arc<ResetRoutineDaysHandler>,
        delete_handler: Arc<DeleteRoutineHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            toggle_handler,
            reset_handler,
            delete_handler,
        }
    }
}

fn parse_routine_id(raw: &str) -> Result<RoutineId, Response> {
    raw.parse::<RoutineId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid routine ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/routines - Create a routine
pub async fn create_routine(
    State(handlers): State<RoutineHandlers>,
    RequireUser(user_id): RequireUser,
    Json(req): Json<CreateRoutineRequest>,
) -> Response {
    let routine = match NewRoutine::try_from(req) {
        Ok(routine) => routine,
        Err(e) => return domain_error_response(e.into()),
    };

    match handlers
        .create_handler
        .handle(CreateRoutineCommand { user_id, routine })
        .await
    {
        Ok(routine) => {
            let response: RoutineResponse = routine.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/routines - List the user's routines, newest first
pub async fn list_routines(
    State(handlers): State<RoutineHandlers>,
    RequireUser(user_id): RequireUser,
) -> Response {
    match handlers.list_handler.handle(ListRoutinesQuery { user_id }).await {
        Ok(routines) => {
            let response: Vec<RoutineResponse> = routines.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/routines/:id/days/:day/toggle - Flip one day's completion mark
pub async fn toggle_routine_day(
    State(handlers): State<RoutineHandlers>,
    RequireUser(user_id): RequireUser,
    Path((routine_id, day)): Path<(String, String)>,
) -> Response {
    let routine_id = match parse_routine_id(&routine_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let day = match day.parse::<TrainingDay>() {
        Ok(day) => day,
        Err(e) => return domain_error_response(e.into()),
    };

    let cmd = ToggleRoutineDayCommand {
        user_id,
        routine_id,
        day,
    };

    match handlers.toggle_handler.handle(cmd).await {
        Ok(routine) => {
            let response: RoutineResponse = routine.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/routines/:id/reset - Clear all completion marks
pub async fn reset_routine_days(
    State(handlers): State<RoutineHandlers>,
    RequireUser(user_id): RequireUser,
    Path(routine_id): Path<String>,
) -> Response {
    let routine_id = match parse_routine_id(&routine_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .reset_handler
        .handle(ResetRoutineDaysCommand { user_id, routine_id })
        .await
    {
        Ok(routine) => {
            let response: RoutineResponse = routine.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/routines/:id - Delete a routine
pub async fn delete_routine(
    State(handlers): State<RoutineHandlers>,
    RequireUser(user_id): RequireUser,
    Path(routine_id): Path<String>,
) -> Response {
    let routine_id = match parse_routine_id(&routine_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteRoutineCommand { user_id, routine_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_routine_id_maps_to_400() {
        let response = parse_routine_id("not-a-uuid").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
