//! ResetRoutineDaysHandler - clears a routine's completion marks.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RoutineId, UserId};
use crate::domain::routine::Routine;
use crate::ports::RoutineRepository;

use super::routine_not_found;

#[derive(Debug, Clone)]
pub struct ResetRoutineDaysCommand {
    pub user_id: UserId,
    pub routine_id: RoutineId,
}

pub struct ResetRoutineDaysHandler {
    repository: Arc<dyn RoutineRepository>,
}

impl ResetRoutineDaysHandler {
    pub fn new(repository: Arc<dyn RoutineRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ResetRoutineDaysCommand) -> Result<Routine, DomainError> {
        let mut routine = self
            .repository
            .find(&cmd.user_id, &cmd.routine_id)
            .await?
            .ok_or_else(|| routine_not_found(&cmd.routine_id))?;

        routine.reset_days();
        self.repository.save(&routine).await?;
        Ok(routine)
    }
}
