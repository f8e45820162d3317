/// ANSI color helper utilities for terminal output.
use crate::models::compliance::{ComplianceStatus, Severity};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_severity(sev: Severity) -> &'static str {
    match sev {
        Severity::Info => CYAN,
        Severity::Warning => YELLOW,
        Severity::Error => RED,
    }
}

pub fn color_for_status(status: ComplianceStatus) -> &'static str {
    match status {
        ComplianceStatus::Compliant => GREEN,
        ComplianceStatus::BreakRequired => YELLOW,
        ComplianceStatus::LegalMaximumReached => RED,
    }
}

/// Wrap `value` in `color`, greying it out when it is an empty placeholder.
pub fn paint(value: &str, color: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}
