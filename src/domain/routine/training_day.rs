//! Weekday labels used by routines (Spanish initials, Monday first).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrainingDay {
    #[serde(rename = "L")]
    Monday,
    #[serde(rename = "M")]
    Tuesday,
    #[serde(rename = "X")]
    Wednesday,
    #[serde(rename = "J")]
    Thursday,
    #[serde(rename = "V")]
    Friday,
    #[serde(rename = "S")]
    Saturday,
    #[serde(rename = "D")]
    Sunday,
}

impl TrainingDay {
    /// All days in week order.
    pub fn all() -> &'static [TrainingDay] {
        &[
            TrainingDay::Monday,
            TrainingDay::Tuesday,
            TrainingDay::Wednesday,
            TrainingDay::Thursday,
            TrainingDay::Friday,
            TrainingDay::Saturday,
            TrainingDay::Sunday,
        ]
    }

    /// Single-letter label.
    pub fn label(&self) -> &'static str {
        match self {
            TrainingDay::Monday => "L",
            TrainingDay::Tuesday => "M",
            TrainingDay::Wednesday => "X",
            TrainingDay::Thursday => "J",
            TrainingDay::Friday => "V",
            TrainingDay::Saturday => "S",
            TrainingDay::Sunday => "D",
        }
    }
}

impl fmt::Display for TrainingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TrainingDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrainingDay::all()
            .iter()
            .copied()
            .find(|day| day.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "training_day",
                    format!("'{}' is not one of L, M, X, J, V, S, D", s),
                )
            })
    }
}
