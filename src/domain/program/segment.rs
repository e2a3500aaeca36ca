//! Segment - an ordered week of activities.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::foundation::{ActivityId, SegmentId, ValidationError};

use super::Activity;

/// A week-sized grouping of activities.
///
/// The `index` is assigned when the segment is placed into a
/// [`Program`](super::Program); segment `i` depends on segment `i - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    id: SegmentId,
    index: usize,
    title: String,
    activities: Vec<Activity>,
}

impl Segment {
    /// Creates a segment that is not yet placed in a program.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is blank or there are no activities
    /// - `Duplicate` if an activity id appears twice in this segment
    pub fn new(
        id: SegmentId,
        title: impl Into<String>,
        activities: Vec<Activity>,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("segment_title"));
        }
        if activities.is_empty() {
            return Err(ValidationError::empty_field("activities"));
        }

        let mut seen = HashSet::with_capacity(activities.len());
        for activity in &activities {
            if !seen.insert(activity.id()) {
                return Err(ValidationError::duplicate(
                    "activity_id",
                    activity.id().as_str(),
                ));
            }
        }

        Ok(Self {
            id,
            index: 0,
            title,
            activities,
        })
    }

    pub(super) fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn id(&self) -> &SegmentId {
        &self.id
    }

    /// Zero-based position within the program.
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based display number ("Week 3").
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Activities in insertion order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn activity_ids(&self) -> impl Iterator<Item = &ActivityId> {
        self.activities.iter().map(Activity::id)
    }

    pub fn contains_activity(&self, id: &ActivityId) -> bool {
        self.activities.iter().any(|a| a.id() == id)
    }
}
