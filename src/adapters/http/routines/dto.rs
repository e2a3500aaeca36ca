//! HTTP DTOs for routine endpoints.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::routine::{NewRoutine, Routine, TrainingDay};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a routine.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoutineRequest {
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<u32>,
    /// Day labels (`L M X J V S D`).
    #[serde(default)]
    pub training_days: Vec<String>,
}

impl TryFrom<CreateRoutineRequest> for NewRoutine {
    type Error = ValidationError;

    fn try_from(req: CreateRoutineRequest) -> Result<Self, Self::Error> {
        let training_days = req
            .training_days
            .iter()
            .map(|d| d.parse::<TrainingDay>())
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(NewRoutine {
            title: req.title,
            notes: req.notes,
            weight_kg: req.weight_kg,
            sets: req.sets,
            reps: req.reps,
            training_days,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct RoutineResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    pub training_days: Vec<TrainingDay>,
    pub completed_days: Vec<TrainingDay>,
    pub created_at: String,
}

impl From<Routine> for RoutineResponse {
    fn from(routine: Routine) -> Self {
        Self {
            id: routine.id().to_string(),
            title: routine.title().to_string(),
            notes: routine.notes().map(str::to_string),
            weight_kg: routine.weight_kg(),
            sets: routine.sets(),
            reps: routine.reps(),
            training_days: routine.training_days().iter().copied().collect(),
            completed_days: routine.completed_days().iter().copied().collect(),
            created_at: routine.created_at().as_datetime().to_rfc3339(),
        }
    }
}
