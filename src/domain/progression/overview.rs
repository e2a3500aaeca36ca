//! Read models derived from a program and a completion set.
//!
//! Both views are recomputed on demand; nothing here is persisted.

use serde::Serialize;

use crate::domain::foundation::{ActivityId, SegmentId, SegmentState};
use crate::domain::program::Program;

use super::{CompletionSet, ProgramProgress, ProgressionEngine, ProgressionError};

/// Per-segment row of the overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentSummary {
    pub id: SegmentId,
    pub index: usize,
    pub number: usize,
    pub title: String,
    pub state: SegmentState,
    pub completed_activities: usize,
    pub total_activities: usize,
}

/// Whole-program view: every segment's state plus aggregate progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramOverview {
    pub segments: Vec<SegmentSummary>,
    pub progress: ProgramProgress,
    /// First segment that is not completed; `None` once everything is done.
    pub current_segment_id: Option<SegmentId>,
    pub trained_seconds: u64,
}

impl ProgramOverview {
    pub fn derive(program: &Program, completions: &CompletionSet) -> Self {
        let states = ProgressionEngine::segment_states(program, completions);

        let segments: Vec<SegmentSummary> = program
            .segments()
            .iter()
            .zip(states)
            .map(|(segment, state)| SegmentSummary {
                id: segment.id().clone(),
                index: segment.index(),
                number: segment.number(),
                title: segment.title().to_string(),
                state,
                completed_activities: segment
                    .activity_ids()
                    .filter(|id| completions.contains(id))
                    .count(),
                total_activities: segment.activities().len(),
            })
            .collect();

        let current_segment_id = segments
            .iter()
            .find(|s| !s.state.is_completed())
            .map(|s| s.id.clone());

        Self {
            progress: ProgressionEngine::compute_program_progress(program, completions),
            trained_seconds: ProgressionEngine::trained_seconds(program, completions),
            current_segment_id,
            segments,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current_segment_id.is_none()
    }
}

/// One activity of a segment with its completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityStatus {
    pub id: ActivityId,
    pub ordinal: u32,
    pub title: String,
    pub duration_seconds: u32,
    pub completed: bool,
}

/// Detail view for a single segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentDetail {
    pub id: SegmentId,
    pub index: usize,
    pub number: usize,
    pub title: String,
    pub state: SegmentState,
    pub activities: Vec<ActivityStatus>,
    pub next_segment_id: Option<SegmentId>,
}

impl SegmentDetail {
    pub fn derive(
        program: &Program,
        completions: &CompletionSet,
        segment_id: &SegmentId,
    ) -> Result<Self, ProgressionError> {
        let segment = program
            .segment_by_id(segment_id)
            .ok_or_else(|| ProgressionError::UnknownSegment(segment_id.clone()))?;

        let state = ProgressionEngine::derive_segment_state(program, completions, segment.index())?;
        let next_segment_id = ProgressionEngine::next_segment_id(program, segment_id)?;

        let activities = segment
            .activities()
            .iter()
            .map(|a| ActivityStatus {
                id: a.id().clone(),
                ordinal: a.ordinal(),
                title: a.title().to_string(),
                duration_seconds: a.duration_seconds(),
                completed: completions.contains(a.id()),
            })
            .collect();

        Ok(Self {
            id: segment.id().clone(),
            index: segment.index(),
            number: segment.number(),
            title: segment.title().to_string(),
            state,
            activities,
            next_segment_id,
        })
    }
}
