use crate::errors::{AppError, AppResult};
use crate::export::model::{SessionExport, headers};
use csv::Writer;
use std::path::Path;

/// Write the sessions as CSV to the given file.
pub fn write_csv(path: &Path, sessions: &[SessionExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(headers())
        .map_err(|e| AppError::Export(e.to_string()))?;

    for s in sessions {
        wtr.write_record(&[
            s.id.to_string(),
            s.date.clone(),
            s.start_time.clone(),
            s.end_time.clone(),
            s.duration_hours.to_string(),
            s.description.clone(),
            s.source.clone(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
