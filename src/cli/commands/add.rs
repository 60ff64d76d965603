use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Add or update a volunteer session.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        hours,
        desc,
        edit_id,
        edit,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse start/end times (optional)
        //
        let start_parsed = parse_optional_time(start.as_ref())?;
        let end_parsed = parse_optional_time(end.as_ref())?;

        //
        // 3. Open DB and resolve the current user
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let user = AuthLogic::require_user(&mut pool)?;

        //
        // 4. Execute logic
        //
        AddLogic::apply(
            &mut pool,
            cfg,
            &user,
            d,
            start_parsed,
            end_parsed,
            *hours,
            desc.clone(),
            if *edit { *edit_id } else { None },
        )?;
    }

    Ok(())
}
