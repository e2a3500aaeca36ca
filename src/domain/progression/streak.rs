//! Training streak and recent-activity strip derived from a completion log.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::CompletionLog;

/// Default width of the activity strip shown on the progress screen.
pub const RECENT_ACTIVITY_DAYS: u32 = 14;

/// One cell of the recent-activity strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub active: bool,
}

/// Consecutive days with at least one completion, ending at `today`.
///
/// Zero when nothing was completed on `today`. Dates after `today` are ignored.
pub fn current_streak(log: &CompletionLog, today: NaiveDate) -> u32 {
    let days = log.active_days();
    let mut streak = 0;
    let mut cursor = today;

    // active_days is ordered; walk it backwards from today.
    for day in days.range(..=today).rev() {
        if *day != cursor {
            break;
        }
        streak += 1;
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }

    streak
}

/// Trailing window of `days` calendar days ending at `today`, oldest first.
pub fn recent_activity(log: &CompletionLog, today: NaiveDate, days: u32) -> Vec<DayActivity> {
    let active = log.active_days();

    (0..i64::from(days))
        .rev()
        .filter_map(|offset| today.checked_sub_signed(Duration::days(offset)))
        .map(|date| DayActivity {
            date,
            active: active.contains(&date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ActivityId;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn log(entries: &[(&str, u32)]) -> CompletionLog {
        let mut log = CompletionLog::new();
        for (id, d) in entries {
            log.record(ActivityId::new(*id).unwrap(), day(*d));
        }
        log
    }

    #[test]
    fn empty_log_has_no_streak() {
        assert_eq!(current_streak(&CompletionLog::new(), day(10)), 0);
    }

    #[test]
    fn streak_counts_consecutive_days_ending_today() {
        let log = log(&[("a1", 8), ("a2", 9), ("a3", 10), ("a4", 10)]);
        assert_eq!(current_streak(&log, day(10)), 3);
    }

    #[test]
    fn gap_breaks_the_streak() {
        let log = log(&[("a1", 6), ("a2", 8), ("a3", 9)]);
        assert_eq!(current_streak(&log, day(9)), 2);
    }

    #[test]
    fn streak_is_zero_when_today_is_idle() {
        let log = log(&[("a1", 8), ("a2", 9)]);
        assert_eq!(current_streak(&log, day(10)), 0);
    }

    #[test]
    fn future_completions_are_ignored() {
        let log = log(&[("a1", 10), ("a2", 11)]);
        assert_eq!(current_streak(&log, day(10)), 1);
    }

    #[test]
    fn recent_activity_is_oldest_first() {
        let log = log(&[("a1", 8), ("a2", 10)]);
        let strip = recent_activity(&log, day(10), 3);

        assert_eq!(
            strip,
            vec![
                DayActivity { date: day(8), active: true },
                DayActivity { date: day(9), active: false },
                DayActivity { date: day(10), active: true },
            ]
        );
    }

    #[test]
    fn recent_activity_default_width() {
        let strip = recent_activity(&CompletionLog::new(), day(20), RECENT_ACTIVITY_DAYS);
        assert_eq!(strip.len(), 14);
        assert_eq!(strip[0].date, day(7));
        assert!(strip.iter().all(|d| !d.active));
    }
}
