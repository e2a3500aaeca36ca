//! Routine domain module.
//!
//! User-authored workouts with a weekly schedule and per-day completion
//! marks, kept outside the programme's unlock rules.

mod aggregate;
mod training_day;

pub use aggregate::{
    NewRoutine, Routine, MAX_NOTES_LENGTH, MAX_REPS, MAX_SETS, MAX_TITLE_LENGTH, MAX_WEIGHT_KG,
};
pub use training_day::TrainingDay;
