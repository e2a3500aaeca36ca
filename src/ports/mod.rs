//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CompletionStore` - Versioned per-user completion log
//! - `RoutineRepository` - User-authored routines
//! - `NotificationStore` - Per-user notification feed

mod completion_store;
mod notification_store;
mod routine_repository;

pub use completion_store::{CompletionStore, CompletionStoreError, StoredCompletions};
pub use notification_store::NotificationStore;
pub use routine_repository::RoutineRepository;
