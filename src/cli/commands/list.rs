use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_sessions_in_range;
use crate::errors::{AppError, AppResult};
use crate::models::work_session::WorkSession;
use crate::ui::messages::info;
use crate::ui::report::render_day;
use crate::utils::date;
use chrono::{DateTime, Local, NaiveDate};
use std::collections::BTreeMap;

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    if let Commands::List { period, today } = cmd {
        let pool = DbPool::open_initialized(&cfg.database)?;

        let (from, to) = if *today {
            let d = now.date_naive();
            (d, d)
        } else {
            resolve_period(period, now)?
        };

        let sessions = load_sessions_in_range(&pool.conn, &from, &to)?;
        if sessions.is_empty() {
            info(format!("No sessions between {} and {}.", from, to));
            return Ok(());
        }

        let mut by_day: BTreeMap<NaiveDate, Vec<WorkSession>> = BTreeMap::new();
        for s in sessions {
            by_day.entry(s.start_time.date_naive()).or_default().push(s);
        }

        for (day, day_sessions) in &by_day {
            let summary = Core::build_daily_summary(*day, day_sessions, now)?;
            println!();
            print!("{}", render_day(&summary, &cfg.separator_char));
        }
    }
    Ok(())
}

/// Default period is the month containing `now`.
fn resolve_period(
    period: &Option<String>,
    now: DateTime<Local>,
) -> AppResult<(NaiveDate, NaiveDate)> {
    match period {
        Some(p) => date::resolve_range(p).map_err(AppError::InvalidDate),
        None => date::month_bounds(now.date_naive()).map_err(AppError::InvalidDate),
    }
}
