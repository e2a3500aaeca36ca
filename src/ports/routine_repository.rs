//! RoutineRepository port for user routine persistence

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RoutineId, UserId};
use crate::domain::routine::Routine;

/// Repository for user-authored routines
#[async_trait]
pub trait RoutineRepository: Send + Sync {
    /// Insert or replace a routine
    async fn save(&self, routine: &Routine) -> Result<(), DomainError>;

    /// Find a routine owned by `user_id`
    async fn find(
        &self,
        user_id: &UserId,
        routine_id: &RoutineId,
    ) -> Result<Option<Routine>, DomainError>;

    /// All routines of a user, newest first
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Routine>, DomainError>;

    /// Delete a routine, returning whether it existed
    async fn delete(&self, user_id: &UserId, routine_id: &RoutineId) -> Result<bool, DomainError>;
}
