use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{load_latest_session, load_open_session};
use crate::errors::AppResult;
use crate::export::SessionReportView;
use crate::models::day_summary::SessionReport;
use crate::ui::messages::info;
use crate::ui::report::{render_report, render_timeline};
use chrono::{DateTime, Local};

/// Report on the running session, or on the latest one when `last` is set.
///
/// `None` means there is nothing to report on; callers render the empty state
/// instead of inventing a session.
pub(crate) fn select_report(
    cfg: &Config,
    last: bool,
    now: DateTime<Local>,
) -> AppResult<Option<SessionReport>> {
    let pool = DbPool::open_initialized(&cfg.database)?;

    let session = match load_open_session(&pool.conn)? {
        Some(s) => Some(s),
        None if last => load_latest_session(&pool.conn)?,
        None => None,
    };

    match session {
        Some(s) => Ok(Some(Core::build_session_report(&s, now)?)),
        None => Ok(None),
    }
}

pub(crate) fn print_empty_state(json: bool) -> AppResult<()> {
    if json {
        println!("null");
    } else {
        info("No active tracking.");
    }
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    if let Commands::Status { json, last } = cmd {
        let Some(report) = select_report(cfg, *last, now)? else {
            return print_empty_state(*json);
        };

        if *json {
            let view = SessionReportView::from(&report);
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else {
            print!("{}", render_report(&report, &cfg.separator_char));
            println!();
            print!("{}", render_timeline(&report));
        }
    }
    Ok(())
}
