use crate::core::calculator::{SessionTiming, build_timeline_events, compute_snapshot};
use crate::errors::AppResult;
use crate::models::day_summary::{DaySummary, SessionReport};
use crate::models::work_session::WorkSession;
use chrono::{DateTime, Local, NaiveDate};

pub struct Core;

impl Core {
    /// Snapshot, status and timeline of one session at `now`.
    pub fn build_session_report(
        session: &WorkSession,
        now: DateTime<Local>,
    ) -> AppResult<SessionReport> {
        let timing = SessionTiming::from_session(session, now)?;
        let snapshot = compute_snapshot(&timing, now);
        let timeline = build_timeline_events(&timing, &snapshot);

        Ok(SessionReport {
            session: session.clone(),
            status: snapshot.status(),
            snapshot,
            timeline,
        })
    }

    pub fn build_daily_summary(
        date: NaiveDate,
        sessions: &[WorkSession],
        now: DateTime<Local>,
    ) -> AppResult<DaySummary> {
        let mut reports = Vec::with_capacity(sessions.len());
        for s in sessions {
            reports.push(Self::build_session_report(s, now)?);
        }

        let total_worked_minutes = reports.iter().map(|r| r.snapshot.worked_minutes).sum();
        let total_break_minutes = reports
            .iter()
            .map(|r| r.snapshot.effective_break_minutes)
            .sum();

        Ok(DaySummary {
            date,
            reports,
            total_worked_minutes,
            total_break_minutes,
        })
    }
}
