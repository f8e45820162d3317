use crate::core::calculator::TimelineEvents;
use crate::models::compliance::{ComplianceSnapshot, ComplianceStatus};
use crate::models::work_session::WorkSession;
use chrono::NaiveDate;

/// A session together with everything derived from it at one instant.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub session: WorkSession,
    pub snapshot: ComplianceSnapshot,
    pub status: ComplianceStatus,
    pub timeline: TimelineEvents,
}

#[derive(Debug, Clone)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub reports: Vec<SessionReport>,
    pub total_worked_minutes: i64,
    pub total_break_minutes: i64,
}

impl DaySummary {
    pub fn is_compliant(&self) -> bool {
        self.reports
            .iter()
            .all(|r| r.status == ComplianceStatus::Compliant)
    }
}
