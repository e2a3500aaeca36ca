//! ResetProgressHandler - Command handler for removing completions.
//!
//! The only path by which completions are ever removed.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{DomainError, ErrorCode, SegmentId, UserId};
use crate::domain::program::Program;
use crate::domain::progression::{ProgramOverview, ProgressionError};
use crate::ports::CompletionStore;

use super::DEFAULT_MAX_ATTEMPTS;

/// Command to reset a user's progress.
#[derive(Debug, Clone)]
pub struct ResetProgressCommand {
    pub user_id: UserId,
    /// Reset only this segment's activities; `None` resets everything.
    pub segment_id: Option<SegmentId>,
}

#[derive(Debug, Clone)]
pub struct ResetProgressResult {
    pub removed: usize,
    pub overview: ProgramOverview,
}

pub struct ResetProgressHandler {
    program: Arc<Program>,
    store: Arc<dyn CompletionStore>,
    max_attempts: u32,
}

impl ResetProgressHandler {
    pub fn new(program: Arc<Program>, store: Arc<dyn CompletionStore>) -> Self {
        Self {
            program,
            store,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub async fn handle(&self, cmd: ResetProgressCommand) -> Result<ResetProgressResult, DomainError> {
        let segment = match &cmd.segment_id {
            Some(segment_id) => Some(
                self.program
                    .segment_by_id(segment_id)
                    .ok_or_else(|| ProgressionError::UnknownSegment(segment_id.clone()))?,
            ),
            None => None,
        };

        for attempt in 1..=self.max_attempts {
            let stored = self.store.load(&cmd.user_id).await?;
            let mut log = stored.log;
            let removed = match segment {
                Some(segment) => log.remove_all(segment.activity_ids()),
                None => std::mem::take(&mut log).len(),
            };

            // A full reset publishes an empty log at the next version, so a
            // writer still holding the older version conflicts.
            if removed > 0 {
                match self
                    .store
                    .compare_and_swap(&cmd.user_id, stored.version, &log)
                    .await
                {
                    Ok(_) => {}
                    Err(e) if e.is_conflict() => {
                        warn!(user_id = %cmd.user_id, attempt, "Completion log changed concurrently, retrying reset");
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                }
            }

            match segment {
                Some(segment) => {
                    info!(user_id = %cmd.user_id, segment_id = %segment.id(), removed, "Reset segment progress")
                }
                None => info!(user_id = %cmd.user_id, removed, "Reset all progress"),
            }
            return Ok(ResetProgressResult {
                removed,
                overview: ProgramOverview::derive(&self.program, &log.completion_set()),
            });
        }

        Err(DomainError::new(
            ErrorCode::ConcurrentModification,
            format!("Could not reset progress after {} attempts", self.max_attempts),
        ))
    }
}
