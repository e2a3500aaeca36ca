//! DeleteRoutineHandler - Command handler for removing a routine.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, RoutineId, UserId};
use crate::ports::RoutineRepository;

use super::routine_not_found;

#[derive(Debug, Clone)]
pub struct DeleteRoutineCommand {
    pub user_id: UserId,
    pub routine_id: RoutineId,
}

pub struct DeleteRoutineHandler {
    repository: Arc<dyn RoutineRepository>,
}

impl DeleteRoutineHandler {
    pub fn new(repository: Arc<dyn RoutineRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteRoutineCommand) -> Result<(), DomainError> {
        if !self.repository.delete(&cmd.user_id, &cmd.routine_id).await? {
            return Err(routine_not_found(&cmd.routine_id));
        }
        info!(user_id = %cmd.user_id, routine_id = %cmd.routine_id, "Deleted routine");
        Ok(())
    }
}
