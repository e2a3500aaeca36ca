//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `program` - Static catalog of weeks and training days
//! - `progression` - Pure unlock/completion rules, progress and streaks
//! - `routine` - User-authored routines with a weekly schedule
//! - `notification` - Feed entries produced after completions

pub mod foundation;
pub mod notification;
pub mod program;
pub mod progression;
pub mod routine;
