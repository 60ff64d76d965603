use crate::errors::{AppError, AppResult};
use crate::export::model::SessionExport;
use std::path::Path;

/// Write the sessions as pretty-printed JSON.
pub fn write_json(path: &Path, sessions: &[SessionExport]) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(sessions).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
