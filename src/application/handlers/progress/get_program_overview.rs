//! GetProgramOverviewHandler - Query handler for the progress screen.
//!
//! Returns every segment's state, aggregate progress and streak statistics.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::program::Program;
use crate::domain::progression::{
    current_streak, recent_activity, DayActivity, ProgramOverview, RECENT_ACTIVITY_DAYS,
};
use crate::ports::CompletionStore;

/// Query for a user's overview as of `today`.
#[derive(Debug, Clone)]
pub struct GetProgramOverviewQuery {
    pub user_id: UserId,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakStats {
    pub current_streak: u32,
    pub recent_activity: Vec<DayActivity>,
}

#[derive(Debug, Clone)]
pub struct GetProgramOverviewResult {
    pub overview: ProgramOverview,
    pub streak: StreakStats,
}

pub struct GetProgramOverviewHandler {
    program: Arc<Program>,
    store: Arc<dyn CompletionStore>,
}

impl GetProgramOverviewHandler {
    pub fn new(program: Arc<Program>, store: Arc<dyn CompletionStore>) -> Self {
        Self { program, store }
    }

    pub async fn handle(
        &self,
        query: GetProgramOverviewQuery,
    ) -> Result<GetProgramOverviewResult, DomainError> {
        let stored = self.store.load(&query.user_id).await?;

        Ok(GetProgramOverviewResult {
            overview: ProgramOverview::derive(&self.program, &stored.log.completion_set()),
            streak: StreakStats {
                current_streak: current_streak(&stored.log, query.today),
                recent_activity: recent_activity(&stored.log, query.today, RECENT_ACTIVITY_DAYS),
            },
        })
    }
}
