//! SegmentState enum for the derived lifecycle of a program segment.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Derived accessibility/completion state of a segment.
///
/// Never persisted: always recomputed from the program and the completion set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentState {
    Locked,
    Unlocked,
    Completed,
}

impl SegmentState {
    /// Returns true if the segment can be trained (unlocked or completed).
    pub fn is_accessible(&self) -> bool {
        !matches!(self, SegmentState::Locked)
    }

    /// Returns true if every activity of the segment is done.
    pub fn is_completed(&self) -> bool {
        matches!(self, SegmentState::Completed)
    }
}

impl StateMachine for SegmentState {
    /// Valid transitions:
    /// - Locked -> Unlocked (predecessor finished)
    /// - Locked -> Completed (predecessor finished while own activities were
    ///   already done through activities shared with other segments)
    /// - Unlocked -> Completed
    fn can_transition_to(&self, target: &SegmentState) -> bool {
        use SegmentState::*;
        matches!(
            (self, target),
            (Locked, Unlocked) | (Locked, Completed) | (Unlocked, Completed)
        )
    }
}

impl fmt::Display for SegmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SegmentState::Locked => "Locked",
            SegmentState::Unlocked => "Unlocked",
            SegmentState::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
