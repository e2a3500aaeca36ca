//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::progress::{
    GetProgramOverviewHandler, GetSegmentDetailHandler, ListNotificationsHandler,
    RecordCompletionHandler, ResetProgressHandler,
};
pub use handlers::routine::{
    CreateRoutineHandler, DeleteRoutineHandler, ListRoutinesHandler, ResetRoutineDaysHandler,
    ToggleRoutineDayHandler,
};
