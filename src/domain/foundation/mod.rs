//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Sixpack Creator domain.

mod errors;
mod ids;
mod percentage;
mod segment_state;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ActivityId, NotificationId, RoutineId, SegmentId, UserId};
pub use percentage::Percentage;
pub use segment_state::SegmentState;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
