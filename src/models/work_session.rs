use super::{break_interval::BreakInterval, location::Location, session_state::SessionState};
use chrono::{DateTime, Local};
use serde::Serialize;

/// A tracked work session as assembled from the `work_sessions` row and its
/// open break (if any).
#[derive(Debug, Clone, Serialize)]
pub struct WorkSession {
    pub id: i64,
    pub start_time: DateTime<Local>, // ⇔ work_sessions.start_time (RFC 3339), never updated
    pub end_time: Option<DateTime<Local>>, // ⇔ work_sessions.end_time, set by `stop`
    pub accumulated_break_minutes: i64, // ⇔ work_sessions.break_minutes
    pub location: Option<Location>,
    pub project: Option<String>,
    pub state: SessionState,
    pub open_break: Option<BreakInterval>,
    pub created_at: String,
}

impl WorkSession {
    /// Live duration of the running pause, or 0 when the session is not paused.
    pub fn current_pause_elapsed_seconds(&self, now: DateTime<Local>) -> i64 {
        match (&self.state, &self.open_break) {
            (SessionState::Paused, Some(b)) => b.elapsed_seconds_at(now),
            _ => 0,
        }
    }

    pub fn date_str(&self) -> String {
        self.start_time.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }

    pub fn location_code(&self) -> &'static str {
        self.location.map(|l| l.code()).unwrap_or("")
    }
}
