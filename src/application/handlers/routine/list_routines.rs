//! ListRoutinesHandler - Query handler for a user's routines.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::routine::Routine;
use crate::ports::RoutineRepository;

#[derive(Debug, Clone)]
pub struct ListRoutinesQuery {
    pub user_id: UserId,
}

pub struct ListRoutinesHandler {
    repository: Arc<dyn RoutineRepository>,
}

impl ListRoutinesHandler {
    pub fn new(repository: Arc<dyn RoutineRepository>) -> Self {
        Self { repository }
    }

    /// Newest first.
    pub async fn handle(&self, query: ListRoutinesQuery) -> Result<Vec<Routine>, DomainError> {
        self.repository.list_by_user(&query.user_id).await
    }
}
