use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Create a volunteer profile and log it in.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Signup {
        name,
        age,
        email,
        phone,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        // Signup may be the very first command after init on an empty file.
        init_db(&pool.conn)?;

        AuthLogic::signup(&mut pool, name, *age, email, phone)?;
    }

    Ok(())
}
