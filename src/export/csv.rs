use super::model::{HEADERS, SessionExport};
use crate::errors::AppResult;
use ::csv::Writer;
use std::path::Path;

/// Write session rows as CSV.
pub(crate) fn write_csv(path: &Path, rows: &[SessionExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(HEADERS)?;
    for r in rows {
        wtr.write_record(r.to_record())?;
    }

    wtr.flush()?;
    Ok(())
}
