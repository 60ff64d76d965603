use crate::db::pool::DbPool;
use crate::db::queries::{load_sessions, load_sessions_in_range};
use crate::errors::{AppError, AppResult};
use crate::export::{
    ExportFormat, SessionExport, ensure_writable, notify_export_success, write_csv, write_json,
};
use crate::models::profile::Profile;
use crate::utils::date::range_bounds;
use crate::utils::path::is_absolute;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the current user's sessions.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or one of:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - any `A:B` pair of the above
    pub fn export(
        pool: &mut DbPool,
        user: &Profile,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let sessions = match range {
            None => load_sessions(pool, user.id)?,
            Some(r) if r.eq_ignore_ascii_case("all") => load_sessions(pool, user.id)?,
            Some(r) => {
                let (from, to) = range_bounds(r).map_err(AppError::InvalidDate)?;
                load_sessions_in_range(pool, user.id, &from, &to)?
            }
        };

        if sessions.is_empty() {
            println!("⚠️  No sessions found for the selected range. Nothing to export.");
            return Ok(());
        }

        let flat: Vec<SessionExport> = sessions.iter().map(SessionExport::from).collect();

        match format {
            ExportFormat::Csv => {
                write_csv(path, &flat)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                write_json(path, &flat)?;
                notify_export_success("JSON", path);
            }
        }

        crate::db::log::vlog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} session(s) as {}", flat.len(), format.as_str()),
        )?;

        Ok(())
    }
}
