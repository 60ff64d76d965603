use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { email } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        AuthLogic::login(&mut pool, email)?;
    }

    Ok(())
}
