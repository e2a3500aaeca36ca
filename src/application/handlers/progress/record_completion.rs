//! RecordCompletionHandler - Command handler for marking an activity done.
//!
//! Runs the load / derive / publish cycle against the completion store and
//! retries from a fresh load when another writer wins the race.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::foundation::{ActivityId, DomainError, ErrorCode, UserId};
use crate::domain::notification::Notification;
use crate::domain::program::Program;
use crate::domain::progression::{CompletionOutcome, ProgramOverview, ProgressionEngine};
use crate::ports::{CompletionStore, NotificationStore};

use super::DEFAULT_MAX_ATTEMPTS;

/// Command to record one completed activity.
#[derive(Debug, Clone)]
pub struct RecordCompletionCommand {
    pub user_id: UserId,
    pub activity_id: ActivityId,
    /// Calendar day the completion is logged under.
    pub on: NaiveDate,
}

/// Result of a recorded (or already present) completion.
#[derive(Debug, Clone)]
pub struct RecordCompletionResult {
    pub outcome: CompletionOutcome,
    pub overview: ProgramOverview,
}

/// Handler for recording completions.
pub struct RecordCompletionHandler {
    program: Arc<Program>,
    store: Arc<dyn CompletionStore>,
    notifications: Option<Arc<dyn NotificationStore>>,
    max_attempts: u32,
}

impl RecordCompletionHandler {
    pub fn new(program: Arc<Program>, store: Arc<dyn CompletionStore>) -> Self {
        Self {
            program,
            store,
            notifications: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Publish completed/unlocked notifications to `notifications`.
    pub fn with_notifications(mut self, notifications: Arc<dyn NotificationStore>) -> Self {
        self.notifications = Some(notifications);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub async fn handle(
        &self,
        cmd: RecordCompletionCommand,
    ) -> Result<RecordCompletionResult, DomainError> {
        for attempt in 1..=self.max_attempts {
            let stored = self.store.load(&cmd.user_id).await?;
            let completions = stored.log.completion_set();

            let outcome =
                ProgressionEngine::record_completion(&completions, &cmd.activity_id, &self.program)?;

            if !outcome.recorded {
                debug!(
                    user_id = %cmd.user_id,
                    activity_id = %cmd.activity_id,
                    "Activity already completed"
                );
                let overview = ProgramOverview::derive(&self.program, &outcome.completion_set);
                return Ok(RecordCompletionResult { outcome, overview });
            }

            let mut log = stored.log;
            log.record(cmd.activity_id.clone(), cmd.on);

            match self
                .store
                .compare_and_swap(&cmd.user_id, stored.version, &log)
                .await
            {
                Ok(version) => {
                    info!(
                        user_id = %cmd.user_id,
                        activity_id = %cmd.activity_id,
                        version,
                        completed = ?outcome.just_completed_segment_ids,
                        unlocked = ?outcome.unlocked_segment_ids,
                        "Recorded completion"
                    );
                    self.notify(&cmd.user_id, &outcome).await;
                    let overview = ProgramOverview::derive(&self.program, &outcome.completion_set);
                    return Ok(RecordCompletionResult { outcome, overview });
                }
                Err(e) if e.is_conflict() => {
                    warn!(
                        user_id = %cmd.user_id,
                        attempt,
                        error = %e,
                        "Completion log changed concurrently, retrying"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(DomainError::new(
            ErrorCode::ConcurrentModification,
            format!(
                "Could not record completion after {} attempts",
                self.max_attempts
            ),
        )
        .with_detail("activity_id", cmd.activity_id.as_str()))
    }

    /// Pushes one notification per transition. Failures are logged only; the
    /// completion itself is already published.
    async fn notify(&self, user_id: &UserId, outcome: &CompletionOutcome) {
        let Some(store) = &self.notifications else {
            return;
        };

        let completed = outcome.just_completed_segment_ids.iter().filter_map(|id| {
            self.program
                .segment_by_id(id)
                .map(|s| Notification::segment_completed(id.clone(), s.number()))
        });
        // The first segment starts unlocked and never appears here.
        let unlocked = outcome.unlocked_segment_ids.iter().filter_map(|id| {
            self.program
                .segment_by_id(id)
                .map(|s| Notification::segment_unlocked(id.clone(), s.number()))
        });

        for notification in completed.chain(unlocked) {
            if let Err(e) = store.push(user_id, notification).await {
                warn!(user_id = %user_id, error = %e, "Failed to push notification");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryCompletionStore, InMemoryNotificationStore};
    use crate::domain::foundation::SegmentId;
    use crate::domain::notification::NotificationKind;
    use crate::domain::program::reference_program;
    use crate::domain::progression::CompletionLog;
    use crate::ports::{CompletionStoreError, StoredCompletions};
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    /// Reports a conflict on the first `conflicts` publishes, then delegates.
    struct ConflictingStore {
        inner: InMemoryCompletionStore,
        conflicts: Mutex<u32>,
        publish_attempts: Mutex<u32>,
    }

    impl ConflictingStore {
        fn new(conflicts: u32) -> Self {
            Self {
                inner: InMemoryCompletionStore::new(),
                conflicts: Mutex::new(conflicts),
                publish_attempts: Mutex::new(0),
            }
        }

        fn publish_attempts(&self) -> u32 {
            *self.publish_attempts.lock().unwrap()
        }
    }

    #[async_trait]
    impl CompletionStore for ConflictingStore {
        async fn load(&self, user_id: &UserId) -> Result<StoredCompletions, CompletionStoreError> {
            self.inner.load(user_id).await
        }

        async fn compare_and_swap(
            &self,
            user_id: &UserId,
            expected_version: u64,
            log: &CompletionLog,
        ) -> Result<u64, CompletionStoreError> {
            *self.publish_attempts.lock().unwrap() += 1;
            {
                let mut remaining = self.conflicts.lock().unwrap();
                if *remaining > 0 {
                    *remaining -= 1;
                    return Err(CompletionStoreError::Conflict {
                        expected: expected_version,
                        actual: expected_version + 1,
                    });
                }
            }
            self.inner.compare_and_swap(user_id, expected_version, log).await
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    fn command(activity: &str) -> RecordCompletionCommand {
        RecordCompletionCommand {
            user_id: user(),
            activity_id: ActivityId::new(activity).unwrap(),
            on: today(),
        }
    }

    fn program() -> Arc<Program> {
        Arc::new(reference_program().clone())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn records_completion_with_date() {
        let store = Arc::new(InMemoryCompletionStore::new());
        let handler = RecordCompletionHandler::new(program(), store.clone());

        let result = handler.handle(command("w1d1")).await.unwrap();

        assert!(result.outcome.recorded);
        assert_eq!(result.overview.progress.completed_count, 1);
        let stored = store.load(&user()).await.unwrap();
        assert_eq!(stored.version, 1);
        assert_eq!(
            stored.log.completed_on(&ActivityId::new("w1d1").unwrap()),
            Some(today())
        );
    }

    #[tokio::test]
    async fn repeated_completion_does_not_write() {
        let store = Arc::new(InMemoryCompletionStore::new());
        let handler = RecordCompletionHandler::new(program(), store.clone());

        handler.handle(command("w1d1")).await.unwrap();
        let again = handler.handle(command("w1d1")).await.unwrap();

        assert!(!again.outcome.recorded);
        assert_eq!(store.load(&user()).await.unwrap().version, 1);
    }

    #[tokio::test]
    async fn unknown_activity_is_not_found() {
        let handler =
            RecordCompletionHandler::new(program(), Arc::new(InMemoryCompletionStore::new()));

        let err = handler.handle(command("w99d1")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ActivityNotFound);
    }

    #[tokio::test]
    async fn retries_after_conflict() {
        let store = Arc::new(ConflictingStore::new(2));
        let handler = RecordCompletionHandler::new(program(), store.clone());

        let result = handler.handle(command("w1d1")).await.unwrap();

        assert!(result.outcome.recorded);
        assert_eq!(store.publish_attempts(), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let store = Arc::new(ConflictingStore::new(10));
        let handler = RecordCompletionHandler::new(program(), store.clone()).with_max_attempts(2);

        let err = handler.handle(command("w1d1")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ConcurrentModification);
        assert_eq!(store.publish_attempts(), 2);
    }

    #[tokio::test]
    async fn finishing_a_week_pushes_notifications() {
        let store = Arc::new(InMemoryCompletionStore::new());
        let notifications = Arc::new(InMemoryNotificationStore::new());
        let handler = RecordCompletionHandler::new(program(), store)
            .with_notifications(notifications.clone());

        for day in ["w1d1", "w1d3", "w1d5"] {
            handler.handle(command(day)).await.unwrap();
        }

        let feed = notifications.list_recent(&user(), 10).await.unwrap();
        let kinds: Vec<NotificationKind> = feed.into_iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NotificationKind::SegmentUnlocked {
                    segment_id: SegmentId::new("week2").unwrap(),
                    number: 2
                },
                NotificationKind::SegmentCompleted {
                    segment_id: SegmentId::new("week1").unwrap(),
                    number: 1
                },
            ]
        );
    }
}
