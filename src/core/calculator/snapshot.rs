use super::rules;
use crate::errors::{AppError, AppResult};
use crate::models::compliance::{ComplianceSnapshot, ComplianceStatus};
use crate::models::work_session::WorkSession;
use chrono::{DateTime, Local};

/// Validated timing inputs of the calculator.
///
/// Construction is the only place inputs are checked; once a `SessionTiming`
/// exists every computation over it is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    start_time: DateTime<Local>,
    end_time: Option<DateTime<Local>>,
    accumulated_break_minutes: i64,
    current_pause_elapsed_seconds: i64,
}

impl SessionTiming {
    /// Build timing from raw fields, as a caller holding loose row values would.
    ///
    /// Fails with `InvalidInput` when the start is missing or either break
    /// counter is negative.
    pub fn from_parts(
        start_time: Option<DateTime<Local>>,
        end_time: Option<DateTime<Local>>,
        accumulated_break_minutes: i64,
        current_pause_elapsed_seconds: i64,
    ) -> AppResult<Self> {
        let start_time = start_time
            .ok_or_else(|| AppError::InvalidInput("start_time is required".into()))?;

        if accumulated_break_minutes < 0 {
            return Err(AppError::InvalidInput(format!(
                "accumulated_break_minutes must be >= 0 (got {})",
                accumulated_break_minutes
            )));
        }

        if current_pause_elapsed_seconds < 0 {
            return Err(AppError::InvalidInput(format!(
                "current_pause_elapsed_seconds must be >= 0 (got {})",
                current_pause_elapsed_seconds
            )));
        }

        Ok(Self {
            start_time,
            end_time,
            accumulated_break_minutes,
            current_pause_elapsed_seconds,
        })
    }

    /// Timing of a stored session, with the running pause measured at `now`.
    pub fn from_session(session: &WorkSession, now: DateTime<Local>) -> AppResult<Self> {
        Self::from_parts(
            Some(session.start_time),
            session.end_time,
            session.accumulated_break_minutes,
            session.current_pause_elapsed_seconds(now),
        )
    }

    pub fn start_time(&self) -> DateTime<Local> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Local>> {
        self.end_time
    }

    pub fn accumulated_break_minutes(&self) -> i64 {
        self.accumulated_break_minutes
    }

    pub fn current_pause_elapsed_seconds(&self) -> i64 {
        self.current_pause_elapsed_seconds
    }
}

/// Compute the compliance snapshot of `timing` at `now`.
///
/// Worked time runs from the start to the end of a completed session, or to
/// `now` otherwise. Break time is tracked alongside and not subtracted.
pub fn compute_snapshot(timing: &SessionTiming, now: DateTime<Local>) -> ComplianceSnapshot {
    let until = timing.end_time.unwrap_or(now);
    let worked_minutes = (until - timing.start_time).num_minutes().max(0);

    // both counters are non-negative, so integer division floors
    let effective_break_minutes =
        timing.accumulated_break_minutes + timing.current_pause_elapsed_seconds / 60;

    let required_break_minutes = rules::required_break_minutes(worked_minutes);

    ComplianceSnapshot {
        worked_minutes,
        effective_break_minutes,
        required_break_minutes,
        break_satisfied: effective_break_minutes >= required_break_minutes,
        minutes_until_legal_max: rules::minutes_until_legal_max(worked_minutes),
    }
}

impl ComplianceSnapshot {
    /// Badge-level classification; reaching the ceiling outranks a missing break.
    pub fn status(&self) -> ComplianceStatus {
        if self.worked_minutes >= rules::LEGAL_MAXIMUM_MINUTES {
            ComplianceStatus::LegalMaximumReached
        } else if !self.break_satisfied {
            ComplianceStatus::BreakRequired
        } else {
            ComplianceStatus::Compliant
        }
    }

    /// Break minutes still owed right now.
    pub fn missing_break_minutes(&self) -> i64 {
        (self.required_break_minutes - self.effective_break_minutes).max(0)
    }
}
