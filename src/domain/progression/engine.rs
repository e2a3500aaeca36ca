//! ProgressionEngine - derives unlock/completion state from a program and
//! a completion set.
//!
//! Every function here is pure: no I/O, no caching, no interior state. The
//! LOCKED/UNLOCKED/COMPLETED rules live in [`ProgressionEngine::derive_segment_state`]
//! and nowhere else.

use serde::Serialize;

use crate::domain::foundation::{ActivityId, Percentage, SegmentId, SegmentState, StateMachine};
use crate::domain::program::{Program, Segment};

use super::{CompletionSet, ProgressionError};

/// Aggregate completion statistics for a whole program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramProgress {
    pub completed_count: usize,
    pub total_count: usize,
    pub percent: Percentage,
}

/// Result of recording one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// `input ∪ {activity}`; identical to the input when already present.
    pub completion_set: CompletionSet,
    /// Segments that left `Locked` because of this addition, in program order.
    pub unlocked_segment_ids: Vec<SegmentId>,
    /// Segments that entered `Completed` because of this addition, in program order.
    pub just_completed_segment_ids: Vec<SegmentId>,
    /// False when the activity was already in the input set.
    pub recorded: bool,
}

impl CompletionOutcome {
    fn unchanged(completion_set: CompletionSet) -> Self {
        Self {
            completion_set,
            unlocked_segment_ids: Vec::new(),
            just_completed_segment_ids: Vec::new(),
            recorded: false,
        }
    }

    /// True if any segment changed state.
    pub fn has_transitions(&self) -> bool {
        !self.unlocked_segment_ids.is_empty() || !self.just_completed_segment_ids.is_empty()
    }
}

/// Stateless progression rules.
pub struct ProgressionEngine;

impl ProgressionEngine {
    /// Derives the state of the segment at `segment_index`.
    ///
    /// - Segment 0 is never `Locked`.
    /// - Segment `i > 0` is `Locked` unless every activity of segment `i - 1`
    ///   is in `completions`.
    /// - An accessible segment is `Completed` iff all its own activities are done.
    pub fn derive_segment_state(
        program: &Program,
        completions: &CompletionSet,
        segment_index: usize,
    ) -> Result<SegmentState, ProgressionError> {
        let segment = program
            .segment(segment_index)
            .ok_or(ProgressionError::OutOfRange {
                index: segment_index,
                len: program.len(),
            })?;

        let unlocked = match segment_index.checked_sub(1) {
            None => true,
            Some(previous) => program
                .segment(previous)
                .map_or(true, |p| Self::all_done(p, completions)),
        };

        Ok(if !unlocked {
            SegmentState::Locked
        } else if Self::all_done(segment, completions) {
            SegmentState::Completed
        } else {
            SegmentState::Unlocked
        })
    }

    /// Derives the state of every segment, in program order.
    pub fn segment_states(program: &Program, completions: &CompletionSet) -> Vec<SegmentState> {
        (0..program.len())
            .filter_map(|i| Self::derive_segment_state(program, completions, i).ok())
            .collect()
    }

    /// Proposes adding `activity_id` to `completions`.
    ///
    /// Re-derives every segment before and after the addition so catalogs
    /// that share activities between segments report all affected segments.
    ///
    /// # Errors
    ///
    /// `UnknownActivity` if no segment contains `activity_id`.
    pub fn record_completion(
        completions: &CompletionSet,
        activity_id: &ActivityId,
        program: &Program,
    ) -> Result<CompletionOutcome, ProgressionError> {
        if !program.contains_activity(activity_id) {
            return Err(ProgressionError::UnknownActivity(activity_id.clone()));
        }
        if completions.contains(activity_id) {
            return Ok(CompletionOutcome::unchanged(completions.clone()));
        }

        let before = Self::segment_states(program, completions);
        let next = completions.with(activity_id.clone());
        let after = Self::segment_states(program, &next);

        let mut unlocked_segment_ids = Vec::new();
        let mut just_completed_segment_ids = Vec::new();

        for (segment, (old, new)) in program.segments().iter().zip(before.iter().zip(&after)) {
            if old == new {
                continue;
            }
            debug_assert!(
                old.can_transition_to(new),
                "adding a completion must never regress segment {}: {:?} -> {:?}",
                segment.id(),
                old,
                new
            );
            if *old == SegmentState::Locked {
                unlocked_segment_ids.push(segment.id().clone());
            }
            if *new == SegmentState::Completed {
                just_completed_segment_ids.push(segment.id().clone());
            }
        }

        Ok(CompletionOutcome {
            completion_set: next,
            unlocked_segment_ids,
            just_completed_segment_ids,
            recorded: true,
        })
    }

    /// Computes program-wide progress.
    ///
    /// Ids in `completions` that are not in the program are ignored.
    pub fn compute_program_progress(
        program: &Program,
        completions: &CompletionSet,
    ) -> ProgramProgress {
        let total_count = program.total_activities();
        let completed_count = program
            .activities()
            .filter(|a| completions.contains(a.id()))
            .count();

        ProgramProgress {
            completed_count,
            total_count,
            percent: Percentage::from_ratio(completed_count, total_count),
        }
    }

    /// Returns the id of the segment following `current`, or `None` for the last one.
    pub fn next_segment_id(
        program: &Program,
        current: &SegmentId,
    ) -> Result<Option<SegmentId>, ProgressionError> {
        let segment = program
            .segment_by_id(current)
            .ok_or_else(|| ProgressionError::UnknownSegment(current.clone()))?;

        Ok(program
            .segment(segment.index() + 1)
            .map(|next| next.id().clone()))
    }

    /// Sum of `duration_seconds` over completed activity occurrences.
    pub fn trained_seconds(program: &Program, completions: &CompletionSet) -> u64 {
        program
            .activities()
            .filter(|a| completions.contains(a.id()))
            .map(|a| u64::from(a.duration_seconds()))
            .sum()
    }

    fn all_done(segment: &Segment, completions: &CompletionSet) -> bool {
        segment.activity_ids().all(|id| completions.contains(id))
    }
}
