use serde::Serialize;
use std::fmt;

/// Lifecycle of a tracked session. "Idle" is the absence of an open session
/// and therefore has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Tracking,
    Paused,
    Stopped,
}

impl SessionState {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SessionState::Tracking => "tracking",
            SessionState::Paused => "paused",
            SessionState::Stopped => "stopped",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "tracking" => Some(SessionState::Tracking),
            "paused" => Some(SessionState::Paused),
            "stopped" => Some(SessionState::Stopped),
            _ => None,
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
