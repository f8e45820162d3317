use super::model::SessionExport;
use crate::errors::AppResult;
use std::path::Path;

/// Write session rows as pretty-printed JSON.
pub(crate) fn write_json(path: &Path, rows: &[SessionExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
