//! Progress handlers - programme completions, resets and read models.

mod get_program_overview;
mod get_segment_detail;
mod list_notifications;
mod record_completion;
mod reset_progress;

/// Publish attempts before a store conflict is reported to the caller.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub use get_program_overview::{
    GetProgramOverviewHandler, GetProgramOverviewQuery, GetProgramOverviewResult, StreakStats,
};
pub use get_segment_detail::{GetSegmentDetailHandler, GetSegmentDetailQuery};
pub use list_notifications::{
    ListNotificationsHandler, ListNotificationsQuery, DEFAULT_NOTIFICATION_LIMIT,
};
pub use record_completion::{
    RecordCompletionCommand, RecordCompletionHandler, RecordCompletionResult,
};
pub use reset_progress::{ResetProgressCommand, ResetProgressHandler, ResetProgressResult};
