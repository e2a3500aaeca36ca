//! Progression module - unlock rules, progress and streaks.
//!
//! The engine is a pure function of a [`Program`](crate::domain::program::Program)
//! and a [`CompletionSet`]. Persisting completions and publishing the result
//! is the caller's job (see `application::handlers::progress`).

mod completion_set;
mod engine;
mod errors;
mod overview;
mod streak;

pub use completion_set::{CompletionLog, CompletionSet};
pub use engine::{CompletionOutcome, ProgramProgress, ProgressionEngine};
pub use errors::ProgressionError;
pub use overview::{ActivityStatus, ProgramOverview, SegmentDetail, SegmentSummary};
pub use streak::{current_streak, recent_activity, DayActivity, RECENT_ACTIVITY_DAYS};
