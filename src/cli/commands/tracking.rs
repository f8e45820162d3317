use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::tracking::TrackingLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::ui::messages::{info, success};
use crate::utils::mins2readable;
use chrono::{DateTime, Local};

fn resolve_location(code: Option<&str>) -> AppResult<Option<Location>> {
    match code.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => Location::from_code(c)
            .map(Some)
            .ok_or_else(|| AppError::InvalidLocation(format!(
                "'{}'. Use one of O (office), R (remote), C (client), M (mixed)",
                c
            ))),
        None => Ok(None),
    }
}

/// Handle `start`, `pause`, `resume` and `stop`.
pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    let mut pool = DbPool::open_initialized(&cfg.database)?;

    match cmd {
        Commands::Start { loc, project } => {
            let code = loc.as_deref().or(Some(cfg.default_location.as_str()));
            let location = resolve_location(code)?;
            let project = project.as_deref().or_else(|| cfg.default_project());

            let session = TrackingLogic::start(&mut pool, now, location, project)?;
            success(format!(
                "Tracking started at {} (session #{})",
                session.start_time.format("%Y-%m-%d %H:%M"),
                session.id
            ));
        }

        Commands::Pause => {
            let session = TrackingLogic::pause(&mut pool, now)?;
            info(format!(
                "Break started at {} (session #{})",
                now.format("%H:%M"),
                session.id
            ));
        }

        Commands::Resume => {
            let (session, minutes) = TrackingLogic::resume(&mut pool, now)?;
            success(format!(
                "Break ended at {} after {} min; breaks so far: {}",
                now.format("%H:%M"),
                minutes,
                mins2readable(session.accumulated_break_minutes)
            ));
        }

        Commands::Stop => {
            let session = TrackingLogic::stop(&mut pool, now)?;
            let report = Core::build_session_report(&session, now)?;
            success(format!(
                "Tracking stopped at {} (session #{}): worked {}, breaks {}, {}",
                now.format("%H:%M"),
                session.id,
                mins2readable(report.snapshot.worked_minutes),
                mins2readable(report.snapshot.effective_break_minutes),
                report.status
            ));
        }

        _ => {}
    }

    Ok(())
}
