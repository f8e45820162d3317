use super::status::{print_empty_state, select_report};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::compliance::TimelineEvent;
use crate::ui::report::render_timeline;
use chrono::{DateTime, Local};

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    if let Commands::Timeline { json, last } = cmd {
        let Some(report) = select_report(cfg, *last, now)? else {
            return print_empty_state(*json);
        };

        if *json {
            let events: Vec<TimelineEvent> = report.timeline.iter().collect();
            println!("{}", serde_json::to_string_pretty(&events)?);
        } else {
            print!("{}", render_timeline(&report));
        }
    }
    Ok(())
}
