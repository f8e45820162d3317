use chrono::{DateTime, Local};
use serde::Serialize;

/// One pause inside a work session. `end_time` is `None` while the pause is running.
#[derive(Debug, Clone, Serialize)]
pub struct BreakInterval {
    pub id: i64,
    pub session_id: i64,
    pub start_time: DateTime<Local>,
    pub end_time: Option<DateTime<Local>>,
}

impl BreakInterval {
    /// Whole minutes of the pause if it ended at `end`.
    pub fn minutes_until(&self, end: DateTime<Local>) -> i64 {
        (end - self.start_time).num_minutes().max(0)
    }

    /// Seconds elapsed since the pause began, measured at `now`.
    pub fn elapsed_seconds_at(&self, now: DateTime<Local>) -> i64 {
        (now - self.start_time).num_seconds().max(0)
    }
}
