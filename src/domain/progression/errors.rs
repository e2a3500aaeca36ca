//! Progression engine errors.
//!
//! All variants are caller contract violations (a program and completion
//! set that do not belong together). They are deterministic; retrying with
//! the same inputs fails the same way.

use thiserror::Error;

use crate::domain::foundation::{ActivityId, DomainError, ErrorCode, SegmentId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    #[error("Segment index {index} is out of range for a program of {len} segments")]
    OutOfRange { index: usize, len: usize },

    #[error("Activity '{0}' is not part of the program")]
    UnknownActivity(ActivityId),

    #[error("Segment '{0}' is not part of the program")]
    UnknownSegment(SegmentId),
}

impl From<ProgressionError> for DomainError {
    fn from(err: ProgressionError) -> Self {
        match &err {
            ProgressionError::OutOfRange { index, .. } => {
                DomainError::new(ErrorCode::OutOfRange, err.to_string())
                    .with_detail("segment_index", index.to_string())
            }
            ProgressionError::UnknownActivity(id) => {
                DomainError::new(ErrorCode::ActivityNotFound, err.to_string())
                    .with_detail("activity_id", id.as_str())
            }
            ProgressionError::UnknownSegment(id) => {
                DomainError::new(ErrorCode::SegmentNotFound, err.to_string())
                    .with_detail("segment_id", id.as_str())
            }
        }
    }
}
