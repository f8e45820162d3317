//! Statutory working-time thresholds, all expressed in minutes.
//!
//! Every number the compliance rules depend on is declared here; the rest of
//! the crate refers to these names only.

/// Worked time from which a 30 minute break is due (6h).
pub const SHORT_BREAK_THRESHOLD_MINUTES: i64 = 360;

/// Worked time from which a 45 minute break is due (9h).
pub const LONG_BREAK_THRESHOLD_MINUTES: i64 = 540;

/// Break owed once the short threshold is crossed.
pub const SHORT_BREAK_MINUTES: i64 = 30;

/// Break owed once the long threshold is crossed.
pub const LONG_BREAK_MINUTES: i64 = 45;

/// Statutory daily ceiling (10h).
pub const LEGAL_MAXIMUM_MINUTES: i64 = 600;

/// Where the timeline places the "break taken" marker, counted from session
/// start. Break intervals are not positioned exactly, so this is a display
/// estimate only.
pub const BREAK_MARKER_OFFSET_MINUTES: i64 = 240;

/// Minimum break owed for the given worked time: 0, 30 or 45.
pub fn required_break_minutes(worked_minutes: i64) -> i64 {
    if worked_minutes >= LONG_BREAK_THRESHOLD_MINUTES {
        LONG_BREAK_MINUTES
    } else if worked_minutes >= SHORT_BREAK_THRESHOLD_MINUTES {
        SHORT_BREAK_MINUTES
    } else {
        0
    }
}

/// Minutes left before the daily ceiling, never negative.
pub fn minutes_until_legal_max(worked_minutes: i64) -> i64 {
    (LEGAL_MAXIMUM_MINUTES - worked_minutes).max(0)
}
