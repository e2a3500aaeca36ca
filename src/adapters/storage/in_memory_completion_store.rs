//! In-Memory Completion Store Adapter
//!
//! Keeps each user's completion log in memory with a version counter.
//! Used in development and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::domain::progression::CompletionLog;
use crate::ports::{CompletionStore, CompletionStoreError, StoredCompletions};

/// In-memory storage for completion logs
#[derive(Debug, Clone, Default)]
pub struct InMemoryCompletionStore {
    logs: Arc<RwLock<HashMap<UserId, StoredCompletions>>>,
}

impl InMemoryCompletionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompletionStore for InMemoryCompletionStore {
    async fn load(&self, user_id: &UserId) -> Result<StoredCompletions, CompletionStoreError> {
        Ok(self
            .logs
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn compare_and_swap(
        &self,
        user_id: &UserId,
        expected_version: u64,
        log: &CompletionLog,
    ) -> Result<u64, CompletionStoreError> {
        let mut logs = self.logs.write().await;
        let actual = logs.get(user_id).map_or(0, |stored| stored.version);
        if actual != expected_version {
            return Err(CompletionStoreError::Conflict {
                expected: expected_version,
                actual,
            });
        }

        let version = actual + 1;
        logs.insert(
            user_id.clone(),
            StoredCompletions {
                log: log.clone(),
                version,
            },
        );
        Ok(version)
    }
}
