//! ToggleRoutineDayHandler - flips one day's completion mark.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{DomainError, RoutineId, UserId};
use crate::domain::routine::{Routine, TrainingDay};
use crate::ports::RoutineRepository;

use super::routine_not_found;

#[derive(Debug, Clone)]
pub struct ToggleRoutineDayCommand {
    pub user_id: UserId,
    pub routine_id: RoutineId,
    pub day: TrainingDay,
}

pub struct ToggleRoutineDayHandler {
    repository: Arc<dyn RoutineRepository>,
}

impl ToggleRoutineDayHandler {
    pub fn new(repository: Arc<dyn RoutineRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ToggleRoutineDayCommand) -> Result<Routine, DomainError> {
        let mut routine = self
            .repository
            .find(&cmd.user_id, &cmd.routine_id)
            .await?
            .ok_or_else(|| routine_not_found(&cmd.routine_id))?;

        let completed = routine.toggle_day(cmd.day)?;
        self.repository.save(&routine).await?;

        debug!(routine_id = %cmd.routine_id, day = %cmd.day, completed, "Toggled routine day");
        Ok(routine)
    }
}
