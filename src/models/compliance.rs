//! Read-side projections produced by the compliance calculator.
//! None of these are persisted.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Derived view of a session at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceSnapshot {
    pub worked_minutes: i64,
    pub effective_break_minutes: i64,
    pub required_break_minutes: i64,
    pub break_satisfied: bool,
    pub minutes_until_legal_max: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    BreakRequired,
    LegalMaximumReached,
}

impl ComplianceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::BreakRequired => "break required",
            ComplianceStatus::LegalMaximumReached => "legal maximum reached",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineEventKind {
    SessionStart,
    BreakTaken,
    #[serde(rename = "required-break-30")]
    RequiredBreak30,
    #[serde(rename = "required-break-45")]
    RequiredBreak45,
    LegalMaximum,
}

impl TimelineEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineEventKind::SessionStart => "session-start",
            TimelineEventKind::BreakTaken => "break-taken",
            TimelineEventKind::RequiredBreak30 => "required-break-30",
            TimelineEventKind::RequiredBreak45 => "required-break-45",
            TimelineEventKind::LegalMaximum => "legal-maximum",
        }
    }
}

impl fmt::Display for TimelineEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A display marker on the session timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    pub event_time: DateTime<Local>,
    pub kind: TimelineEventKind,
    pub is_satisfied: bool,
    pub severity: Severity,
}
