//! Terminal rendering of compliance reports.

use crate::core::calculator::rules;
use crate::models::compliance::Severity;
use crate::models::day_summary::{DaySummary, SessionReport};
use crate::utils::colors::{RESET, color_for_severity, color_for_status, paint};
use crate::utils::formatting::{bold, separator, yes_no};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub fn render_report(r: &SessionReport, sep: &str) -> String {
    let s = &r.session;
    let snap = &r.snapshot;
    let mut out = String::new();

    out.push_str(&bold(&format!("Session #{} ({})", s.id, s.state)));
    out.push('\n');
    out.push_str(&separator(sep, 40));
    out.push('\n');

    out.push_str(&format!(
        "Started        : {}\n",
        s.start_time.format("%Y-%m-%d %H:%M")
    ));
    if let Some(end) = s.end_time {
        out.push_str(&format!("Stopped        : {}\n", end.format("%Y-%m-%d %H:%M")));
    }
    out.push_str(&format!(
        "Location       : {}\n",
        s.location.map(|l| l.label()).unwrap_or("-")
    ));
    out.push_str(&format!(
        "Project        : {}\n",
        s.project.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!(
        "Worked         : {}\n",
        mins2readable(snap.worked_minutes)
    ));
    out.push_str(&format!(
        "Breaks         : {} (required {} min, satisfied: {})\n",
        mins2readable(snap.effective_break_minutes),
        snap.required_break_minutes,
        yes_no(snap.break_satisfied)
    ));
    out.push_str(&format!(
        "Until {}h max  : {}\n",
        rules::LEGAL_MAXIMUM_MINUTES / 60,
        mins2readable(snap.minutes_until_legal_max)
    ));
    out.push_str(&format!(
        "Status         : {}{}{}\n",
        color_for_status(r.status),
        r.status,
        RESET
    ));

    out
}

fn severity_cell(sev: Severity) -> String {
    paint(sev.as_str(), color_for_severity(sev))
}

pub fn render_timeline(r: &SessionReport) -> String {
    let mut out = String::new();

    for ev in r.timeline.iter() {
        let mark = if ev.is_satisfied { "✔" } else { "✘" };
        out.push_str(&format!(
            "{}  {:<18} {} {}\n",
            ev.event_time.format("%H:%M"),
            ev.kind.as_str(),
            mark,
            severity_cell(ev.severity)
        ));
    }

    out
}

pub fn render_day(summary: &DaySummary, sep: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("START", 5),
        Column::new("END", 5),
        Column::new("STATE", 8),
        Column::new("WORKED", 8),
        Column::new("BREAK", 8),
        Column::new("REQ", 3),
        Column::new("STATUS", 21),
    ]);

    for r in &summary.reports {
        table.add_row(vec![
            r.session.id.to_string(),
            r.session.start_str(),
            r.session.end_str(),
            r.session.state.to_string(),
            mins2readable(r.snapshot.worked_minutes),
            mins2readable(r.snapshot.effective_break_minutes),
            r.snapshot.required_break_minutes.to_string(),
            r.status.label().to_string(),
        ]);
    }

    let mut out = String::new();
    out.push_str(&bold(&format!("=== {} ===", summary.date.format("%Y-%m-%d"))));
    out.push('\n');
    out.push_str(&table.render());
    out.push_str(&separator(sep, 40));
    out.push('\n');
    out.push_str(&format!(
        "Total worked: {} | Total breaks: {} | All compliant: {}\n",
        mins2readable(summary.total_worked_minutes),
        mins2readable(summary.total_break_minutes),
        yes_no(summary.is_compliant())
    ));
    out
}
