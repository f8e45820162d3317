use crate::models::compliance::{ComplianceSnapshot, ComplianceStatus, TimelineEvent};
use crate::models::day_summary::SessionReport;
use crate::models::work_session::WorkSession;
use serde::Serialize;

/// Flat row for session exports (one per session).
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub id: i64,
    pub date: String,
    pub start: String,
    pub end: String,
    pub state: String,
    pub location: String,
    pub project: String,
    pub worked_minutes: i64,
    pub break_minutes: i64,
    pub required_break_minutes: i64,
    pub break_satisfied: bool,
    pub minutes_until_legal_max: i64,
    pub status: String,
}

pub(crate) const HEADERS: [&str; 13] = [
    "id",
    "date",
    "start",
    "end",
    "state",
    "location",
    "project",
    "worked_minutes",
    "break_minutes",
    "required_break_minutes",
    "break_satisfied",
    "minutes_until_legal_max",
    "status",
];

impl From<&SessionReport> for SessionExport {
    fn from(r: &SessionReport) -> Self {
        let s = &r.session;
        Self {
            id: s.id,
            date: s.date_str(),
            start: s.start_str(),
            end: s.end_time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default(),
            state: s.state.to_string(),
            location: s.location_code().to_string(),
            project: s.project.clone().unwrap_or_default(),
            worked_minutes: r.snapshot.worked_minutes,
            break_minutes: r.snapshot.effective_break_minutes,
            required_break_minutes: r.snapshot.required_break_minutes,
            break_satisfied: r.snapshot.break_satisfied,
            minutes_until_legal_max: r.snapshot.minutes_until_legal_max,
            status: r.status.label().to_string(),
        }
    }
}

impl SessionExport {
    pub(crate) fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.clone(),
            self.start.clone(),
            self.end.clone(),
            self.state.clone(),
            self.location.clone(),
            self.project.clone(),
            self.worked_minutes.to_string(),
            self.break_minutes.to_string(),
            self.required_break_minutes.to_string(),
            self.break_satisfied.to_string(),
            self.minutes_until_legal_max.to_string(),
            self.status.clone(),
        ]
    }
}

/// JSON shape of `status --json` / `timeline --json`.
#[derive(Serialize, Clone, Debug)]
pub struct SessionReportView {
    pub session: WorkSession,
    pub snapshot: ComplianceSnapshot,
    pub status: ComplianceStatus,
    pub timeline: Vec<TimelineEvent>,
}

impl From<&SessionReport> for SessionReportView {
    fn from(r: &SessionReport) -> Self {
        Self {
            session: r.session.clone(),
            snapshot: r.snapshot,
            status: r.status,
            timeline: r.timeline.iter().collect(),
        }
    }
}
