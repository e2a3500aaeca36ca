//! Storage Adapters
//!
//! Implementations of the persistence ports.
//!
//! ## Available Adapters
//!
//! - **FileCompletionStore** - One JSON document per user on disk
//! - **InMemoryCompletionStore** - Completion logs in memory (testing/development)
//! - **InMemoryRoutineRepository** - User routines in memory
//! - **InMemoryNotificationStore** - Notification feeds in memory
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileCompletionStore, InMemoryCompletionStore};
//!
//! // Production: file-based storage
//! let store = FileCompletionStore::new("./data/completions");
//!
//! // Testing: in-memory storage
//! let store = InMemoryCompletionStore::new();
//! ```

mod file_completion_store;
mod in_memory_completion_store;
mod in_memory_notification_store;
mod in_memory_routine_repository;

pub use file_completion_store::FileCompletionStore;
pub use in_memory_completion_store::InMemoryCompletionStore;
pub use in_memory_notification_store::InMemoryNotificationStore;
pub use in_memory_routine_repository::InMemoryRoutineRepository;
