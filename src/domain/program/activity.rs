//! Activity - the atomic unit of completion (one training day).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActivityId, ValidationError};

/// A single day's workout inside a segment.
///
/// Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    id: ActivityId,
    ordinal: u32,
    title: String,
    duration_seconds: u32,
}

impl Activity {
    /// Creates an activity.
    ///
    /// `ordinal` only drives display order; completion logic ignores it.
    pub fn new(
        id: ActivityId,
        ordinal: u32,
        title: impl Into<String>,
        duration_seconds: u32,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("activity_title"));
        }
        Ok(Self {
            id,
            ordinal,
            title,
            duration_seconds,
        })
    }

    pub fn id(&self) -> &ActivityId {
        &self.id
    }

    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }
}
