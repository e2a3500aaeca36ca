//! CreateRoutineHandler - Command handler for creating user routines.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, RoutineId, UserId};
use crate::domain::routine::{NewRoutine, Routine};
use crate::ports::RoutineRepository;

#[derive(Debug, Clone)]
pub struct CreateRoutineCommand {
    pub user_id: UserId,
    pub routine: NewRoutine,
}

pub struct CreateRoutineHandler {
    repository: Arc<dyn RoutineRepository>,
}

impl CreateRoutineHandler {
    pub fn new(repository: Arc<dyn RoutineRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateRoutineCommand) -> Result<Routine, DomainError> {
        let routine = Routine::create(RoutineId::new(), cmd.user_id, cmd.routine)?;
        self.repository.save(&routine).await?;

        info!(user_id = %routine.user_id(), routine_id = %routine.id(), "Created routine");
        Ok(routine)
    }
}
