//! Routine aggregate - a user-authored workout with a weekly schedule.
//!
//! Routines live next to the core programme and never affect its
//! progression.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, RoutineId, Timestamp, UserId, ValidationError};

use super::TrainingDay;

/// Maximum length for routine title.
pub const MAX_TITLE_LENGTH: usize = 120;

/// Maximum length for routine notes.
pub const MAX_NOTES_LENGTH: usize = 2000;

pub const MAX_WEIGHT_KG: f64 = 1000.0;
pub const MAX_SETS: u32 = 100;
pub const MAX_REPS: u32 = 1000;

/// Unvalidated routine input as submitted by a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRoutine {
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub training_days: BTreeSet<TrainingDay>,
}

/// Routine aggregate.
///
/// # Invariants
///
/// - `title` is trimmed and 1-120 characters
/// - `completed_days` is a subset of `training_days`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    id: RoutineId,
    user_id: UserId,
    title: String,
    notes: Option<String>,
    weight_kg: Option<f64>,
    sets: Option<u32>,
    reps: Option<u32>,
    training_days: BTreeSet<TrainingDay>,
    completed_days: BTreeSet<TrainingDay>,
    created_at: Timestamp,
}

impl Routine {
    /// Validates `input` and creates a routine with nothing completed.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if any field is out of bounds
    pub fn create(id: RoutineId, user_id: UserId, input: NewRoutine) -> Result<Self, DomainError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }
        let title_len = title.chars().count();
        if title_len > MAX_TITLE_LENGTH {
            return Err(ValidationError::out_of_range(
                "title",
                1,
                MAX_TITLE_LENGTH as i64,
                title_len as i64,
            )
            .into());
        }

        let notes = input
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        if let Some(notes) = &notes {
            let len = notes.chars().count();
            if len > MAX_NOTES_LENGTH {
                return Err(ValidationError::out_of_range(
                    "notes",
                    0,
                    MAX_NOTES_LENGTH as i64,
                    len as i64,
                )
                .into());
            }
        }

        if let Some(weight) = input.weight_kg {
            if !weight.is_finite() || weight <= 0.0 || weight > MAX_WEIGHT_KG {
                return Err(DomainError::validation(
                    "weight_kg",
                    format!("Weight must be greater than 0 and at most {} kg", MAX_WEIGHT_KG),
                ));
            }
        }
        Self::check_count("sets", input.sets, MAX_SETS)?;
        Self::check_count("reps", input.reps, MAX_REPS)?;

        Ok(Self {
            id,
            user_id,
            title,
            notes,
            weight_kg: input.weight_kg,
            sets: input.sets,
            reps: input.reps,
            training_days: input.training_days,
            completed_days: BTreeSet::new(),
            created_at: Timestamp::now(),
        })
    }

    fn check_count(field: &str, value: Option<u32>, max: u32) -> Result<(), DomainError> {
        match value {
            Some(v) if v == 0 || v > max => {
                Err(ValidationError::out_of_range(field, 1, i64::from(max), i64::from(v)).into())
            }
            _ => Ok(()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &RoutineId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    pub fn sets(&self) -> Option<u32> {
        self.sets
    }

    pub fn reps(&self) -> Option<u32> {
        self.reps
    }

    pub fn training_days(&self) -> &BTreeSet<TrainingDay> {
        &self.training_days
    }

    pub fn completed_days(&self) -> &BTreeSet<TrainingDay> {
        &self.completed_days
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Checks if the given user owns this routine.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Flips the completion mark of `day`, returning whether it is now completed.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `day` is not one of the routine's training days
    pub fn toggle_day(&mut self, day: TrainingDay) -> Result<bool, DomainError> {
        if !self.training_days.contains(&day) {
            return Err(DomainError::validation(
                "training_day",
                format!("Day {} is not scheduled for this routine", day),
            ));
        }

        if self.completed_days.remove(&day) {
            Ok(false)
        } else {
            self.completed_days.insert(day);
            Ok(true)
        }
    }

    /// Clears every completion mark.
    pub fn reset_days(&mut self) {
        self.completed_days.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn input(title: &str) -> NewRoutine {
        NewRoutine {
            title: title.to_string(),
            training_days: [TrainingDay::Monday, TrainingDay::Thursday].into_iter().collect(),
            ..Default::default()
        }
    }

    fn create(input: NewRoutine) -> Result<Routine, DomainError> {
        Routine::create(RoutineId::new(), user(), input)
    }

    #[test]
    fn create_trims_title_and_starts_with_no_completed_days() {
        let routine = create(input("  Press banca  ")).unwrap();
        assert_eq!(routine.title(), "Press banca");
        assert!(routine.completed_days().is_empty());
        assert!(routine.is_owner(&user()));
    }

    #[test]
    fn create_rejects_blank_title() {
        let err = create(input("   ")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"title".to_string()));
    }

    #[test]
    fn create_rejects_overlong_title() {
        let err = create(input(&"x".repeat(MAX_TITLE_LENGTH + 1))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn create_rejects_out_of_bounds_numbers() {
        let zero_sets = NewRoutine { sets: Some(0), ..input("Squat") };
        assert!(create(zero_sets).is_err());

        let heavy = NewRoutine { weight_kg: Some(1500.0), ..input("Squat") };
        assert!(create(heavy).is_err());

        let negative = NewRoutine { weight_kg: Some(-1.0), ..input("Squat") };
        assert!(create(negative).is_err());

        let ok = NewRoutine {
            weight_kg: Some(80.5),
            sets: Some(4),
            reps: Some(10),
            ..input("Squat")
        };
        assert!(create(ok).is_ok());
    }

    #[test]
    fn blank_notes_are_dropped() {
        let routine = create(NewRoutine {
            notes: Some("  ".to_string()),
            ..input("Squat")
        })
        .unwrap();
        assert_eq!(routine.notes(), None);
    }

    #[test]
    fn toggle_day_flips_completion() {
        let mut routine = create(input("Squat")).unwrap();

        assert!(routine.toggle_day(TrainingDay::Monday).unwrap());
        assert!(routine.completed_days().contains(&TrainingDay::Monday));
        assert!(!routine.toggle_day(TrainingDay::Monday).unwrap());
        assert!(routine.completed_days().is_empty());
    }

    #[test]
    fn toggle_unscheduled_day_fails() {
        let mut routine = create(input("Squat")).unwrap();
        let err = routine.toggle_day(TrainingDay::Sunday).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn reset_days_clears_marks() {
        let mut routine = create(input("Squat")).unwrap();
        routine.toggle_day(TrainingDay::Monday).unwrap();
        routine.toggle_day(TrainingDay::Thursday).unwrap();

        routine.reset_days();
        assert!(routine.completed_days().is_empty());
        assert_eq!(routine.training_days().len(), 2);
    }
}
