use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, date: date_str } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let user = AuthLogic::require_user(&mut pool)?;

        match (id, date_str) {
            (Some(session_id), None) => {
                let prompt = format!(
                    "Delete session #{}? This action is irreversible.",
                    session_id
                );
                if !ask_confirmation(&prompt) {
                    info("Deletion cancelled.");
                    return Ok(());
                }
                DeleteLogic::delete_by_id(&mut pool, &user, *session_id)?;
            }
            (None, Some(raw)) => {
                let d = date::parse_date(raw)
                    .ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;

                let prompt = format!(
                    "Delete ALL sessions for {}? This action is irreversible.",
                    d
                );
                if !ask_confirmation(&prompt) {
                    info("Deletion cancelled.");
                    return Ok(());
                }
                DeleteLogic::delete_by_date(&mut pool, &user, d)?;
            }
            _ => {
                return Err(AppError::Other(
                    "Specify exactly one of --id or --date.".into(),
                ));
            }
        }
    }

    Ok(())
}
