use super::csv::write_csv;
use super::fs_utils::ensure_writable;
use super::json::write_json;
use super::model::SessionExport;
use super::{ExportFormat, notify_export_success};
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_sessions, load_sessions_in_range};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::date::resolve_range;
use crate::utils::path::expand_tilde;
use chrono::{DateTime, Local};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export sessions with their compliance figures at `now`.
    ///
    /// `range`: `None` or `"all"` for everything, otherwise `YYYY`, `YYYY-MM`,
    /// `YYYY-MM-DD` or an `A:B` range of those. Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
        now: DateTime<Local>,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let sessions = match range {
            Some(r) if !r.eq_ignore_ascii_case("all") => {
                let (from, to) = resolve_range(r).map_err(AppError::InvalidDate)?;
                load_sessions_in_range(&pool.conn, &from, &to)?
            }
            _ => load_all_sessions(&pool.conn)?,
        };
        if sessions.is_empty() {
            warning("No sessions found for the selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let mut rows = Vec::with_capacity(sessions.len());
        for s in &sessions {
            rows.push(SessionExport::from(&Core::build_session_report(s, now)?));
        }

        match format {
            ExportFormat::Csv => write_csv(&path, &rows)?,
            ExportFormat::Json => write_json(&path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(rows.len())
    }
}
