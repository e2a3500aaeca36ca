//! Program - the full ordered sequence of segments.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::foundation::{ActivityId, SegmentId, ValidationError};

use super::{Activity, Segment};

/// An immutable training program.
///
/// Invariants (enforced by [`Program::new`]):
/// - at least one segment
/// - segment indices are `0..len`, in order
/// - segment ids are unique
/// - every segment has at least one activity
///
/// Activity ids may repeat across segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    segments: Vec<Segment>,
}

impl Program {
    /// Builds a program, assigning each segment its position as index.
    pub fn new(segments: Vec<Segment>) -> Result<Self, ValidationError> {
        if segments.is_empty() {
            return Err(ValidationError::empty_field("segments"));
        }

        let mut seen = HashSet::with_capacity(segments.len());
        for segment in &segments {
            if !seen.insert(segment.id().clone()) {
                return Err(ValidationError::duplicate("segment_id", segment.id().as_str()));
            }
        }

        let segments = segments
            .into_iter()
            .enumerate()
            .map(|(index, segment)| segment.with_index(index))
            .collect();

        Ok(Self { segments })
    }

    /// Segments in program order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn segment_by_id(&self, id: &SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id() == id)
    }

    /// Returns true if any segment contains the activity.
    pub fn contains_activity(&self, id: &ActivityId) -> bool {
        self.segments.iter().any(|s| s.contains_activity(id))
    }

    /// Returns the first occurrence of an activity in program order.
    pub fn activity(&self, id: &ActivityId) -> Option<&Activity> {
        self.segments
            .iter()
            .flat_map(|s| s.activities())
            .find(|a| a.id() == id)
    }

    /// All activity occurrences in program order.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.segments.iter().flat_map(|s| s.activities())
    }

    /// Total activity occurrences across all segments.
    pub fn total_activities(&self) -> usize {
        self.segments.iter().map(|s| s.activities().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(id: &str, activities: &[&str]) -> Segment {
        Segment::new(
            SegmentId::new(id).unwrap(),
            format!("Segment {}", id),
            activities
                .iter()
                .enumerate()
                .map(|(i, a)| {
                    Activity::new(ActivityId::new(*a).unwrap(), i as u32 + 1, "Day", 45).unwrap()
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn new_assigns_contiguous_indices() {
        let program = Program::new(vec![
            segment("week1", &["a1"]),
            segment("week2", &["b1"]),
            segment("week3", &["c1"]),
        ])
        .unwrap();

        let indices: Vec<usize> = program.segments().iter().map(Segment::index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn new_rejects_empty_program() {
        assert_eq!(
            Program::new(vec![]),
            Err(ValidationError::empty_field("segments"))
        );
    }

    #[test]
    fn new_rejects_duplicate_segment_ids() {
        let result = Program::new(vec![segment("week1", &["a1"]), segment("week1", &["b1"])]);
        assert_eq!(result, Err(ValidationError::duplicate("segment_id", "week1")));
    }

    #[test]
    fn new_allows_activities_shared_across_segments() {
        let program =
            Program::new(vec![segment("week1", &["a1", "x"]), segment("week2", &["x"])]).unwrap();
        assert_eq!(program.total_activities(), 3);
    }

    #[test]
    fn lookups_find_segments_and_activities() {
        let program =
            Program::new(vec![segment("week1", &["a1", "a2"]), segment("week2", &["b1"])]).unwrap();

        let week2 = SegmentId::new("week2").unwrap();
        assert_eq!(program.segment_by_id(&week2).map(Segment::index), Some(1));
        assert!(program.segment(2).is_none());
        assert!(program.contains_activity(&ActivityId::new("b1").unwrap()));
        assert!(!program.contains_activity(&ActivityId::new("zz").unwrap()));
        assert_eq!(
            program
                .activity(&ActivityId::new("a2").unwrap())
                .map(Activity::ordinal),
            Some(2)
        );
    }
}
