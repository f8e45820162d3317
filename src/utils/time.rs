//! Time utilities: parsing the injected instant and local conversion.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime};

/// Convert a naive local date-time; ambiguous or skipped DST instants are rejected.
pub fn to_local(ndt: NaiveDateTime, raw: &str) -> AppResult<DateTime<Local>> {
    ndt.and_local_timezone(Local)
        .single()
        .ok_or_else(|| AppError::InvalidTime(format!("{} is not a valid local time", raw)))
}

/// Parse an instant given on the command line.
///
/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM[:SS]` or RFC 3339.
pub fn parse_instant(s: &str) -> AppResult<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local));
    }

    for fmt in ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return to_local(ndt, s);
        }
    }

    Err(AppError::InvalidTime(s.to_string()))
}

/// The instant a command acts on: the `--at` override or the wall clock.
///
/// This is the one place the clock is read.
pub fn resolve_now(at: &Option<String>) -> AppResult<DateTime<Local>> {
    match at {
        Some(raw) => parse_instant(raw),
        None => Ok(Local::now()),
    }
}
