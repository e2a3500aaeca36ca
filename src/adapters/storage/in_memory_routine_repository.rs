//! In-Memory Routine Repository Adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, RoutineId, UserId};
use crate::domain::routine::Routine;
use crate::ports::RoutineRepository;

/// In-memory storage for routines, keyed by id
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoutineRepository {
    routines: Arc<RwLock<HashMap<RoutineId, Routine>>>,
}

impl InMemoryRoutineRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoutineRepository for InMemoryRoutineRepository {
    async fn save(&self, routine: &Routine) -> Result<(), DomainError> {
        self.routines
            .write()
            .await
            .insert(*routine.id(), routine.clone());
        Ok(())
    }

    async fn find(
        &self,
        user_id: &UserId,
        routine_id: &RoutineId,
    ) -> Result<Option<Routine>, DomainError> {
        Ok(self
            .routines
            .read()
            .await
            .get(routine_id)
            .filter(|r| r.is_owner(user_id))
            .cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Routine>, DomainError> {
        let mut routines: Vec<Routine> = self
            .routines
            .read()
            .await
            .values()
            .filter(|r| r.is_owner(user_id))
            .cloned()
            .collect();
        routines.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(routines)
    }

    async fn delete(&self, user_id: &UserId, routine_id: &RoutineId) -> Result<bool, DomainError> {
        let mut routines = self.routines.write().await;
        let owned = routines
            .get(routine_id)
            .is_some_and(|r| r.is_owner(user_id));
        if owned {
            routines.remove(routine_id);
        }
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::routine::NewRoutine;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn routine(owner: &str, title: &str) -> Routine {
        Routine::create(
            RoutineId::new(),
            user(owner),
            NewRoutine {
                title: title.to_string(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn find_is_scoped_to_owner() {
        let repo = InMemoryRoutineRepository::new();
        let r = routine("alice", "Squat");
        repo.save(&r).await.unwrap();

        assert!(repo.find(&user("alice"), r.id()).await.unwrap().is_some());
        assert!(repo.find(&user("bob"), r.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let repo = InMemoryRoutineRepository::new();
        let first = routine("alice", "First");
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = routine("alice", "Second");
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();
        repo.save(&routine("bob", "Other")).await.unwrap();

        let titles: Vec<String> = repo
            .list_by_user(&user("alice"))
            .await
            .unwrap()
            .iter()
            .map(|r| r.title().to_string())
            .collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn delete_ignores_other_users_routines() {
        let repo = InMemoryRoutineRepository::new();
        let r = routine("alice", "Squat");
        repo.save(&r).await.unwrap();

        assert!(!repo.delete(&user("bob"), r.id()).await.unwrap());
        assert!(repo.delete(&user("alice"), r.id()).await.unwrap());
        assert!(repo.find(&user("alice"), r.id()).await.unwrap().is_none());
    }
}
