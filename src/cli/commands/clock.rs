use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        clock_in,
        clock_out,
        desc,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let user = AuthLogic::require_user(&mut pool)?;

        match (*clock_in, *clock_out) {
            (true, false) => ClockLogic::clock_in(&mut pool, &user)?,
            (false, true) => ClockLogic::clock_out(&mut pool, cfg, &user, desc.clone())?,
            _ => {
                return Err(AppError::Clock(
                    "Specify exactly one of --in or --out.".into(),
                ));
            }
        }
    }

    Ok(())
}
