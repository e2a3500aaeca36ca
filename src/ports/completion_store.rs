//! Completion Store Port - Interface for persisting a user's completion log.
//!
//! The store is versioned so the host can run a read-modify-write cycle
//! without a global lock: load, compute with the engine, then publish with
//! [`CompletionStore::compare_and_swap`]. A lost race surfaces as
//! [`CompletionStoreError::Conflict`] and the caller retries from a fresh load.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::progression::CompletionLog;

/// Errors that can occur during completion store operations
#[derive(Debug, thiserror::Error)]
pub enum CompletionStoreError {
    #[error("Completion log was modified concurrently (expected version {expected}, found {actual})")]
    Conflict { expected: u64, actual: u64 },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to (de)serialize completion log: {0}")]
    Serialization(String),
}

impl CompletionStoreError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, CompletionStoreError::Conflict { .. })
    }
}

impl From<CompletionStoreError> for DomainError {
    fn from(err: CompletionStoreError) -> Self {
        let code = if err.is_conflict() {
            ErrorCode::ConcurrentModification
        } else {
            ErrorCode::StorageError
        };
        DomainError::new(code, err.to_string())
    }
}

/// A completion log together with the version it was read at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredCompletions {
    pub log: CompletionLog,
    /// Zero for a user with nothing stored.
    pub version: u64,
}

/// Port for loading and publishing per-user completion logs
#[async_trait]
pub trait CompletionStore: Send + Sync {
    /// Load the user's log. A user with no record gets an empty log at version 0.
    async fn load(&self, user_id: &UserId) -> Result<StoredCompletions, CompletionStoreError>;

    /// Replace the user's log if the stored version still equals `expected_version`.
    ///
    /// Versions only ever grow; publishing an empty log (a reset) still bumps
    /// the version, so a writer holding an older version always conflicts.
    ///
    /// # Returns
    /// The new version on success
    ///
    /// # Errors
    /// `Conflict` if another writer published first
    async fn compare_and_swap(
        &self,
        user_id: &UserId,
        expected_version: u64,
        log: &CompletionLog,
    ) -> Result<u64, CompletionStoreError>;
}
