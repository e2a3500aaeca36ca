//! Routine handlers - CRUD and per-day completion marks for user routines.

mod create_routine;
mod delete_routine;
mod list_routines;
mod reset_routine_days;
mod toggle_routine_day;

pub use create_routine::{CreateRoutineCommand, CreateRoutineHandler};
pub use delete_routine::{DeleteRoutineCommand, DeleteRoutineHandler};
pub use list_routines::{ListRoutinesHandler, ListRoutinesQuery};
pub use reset_routine_days::{ResetRoutineDaysCommand, ResetRoutineDaysHandler};
pub use toggle_routine_day::{ToggleRoutineDayCommand, ToggleRoutineDayHandler};

use crate::domain::foundation::{DomainError, ErrorCode, RoutineId};

fn routine_not_found(id: &RoutineId) -> DomainError {
    DomainError::new(ErrorCode::RoutineNotFound, format!("Routine not found: {}", id))
        .with_detail("routine_id", id.to_string())
}
