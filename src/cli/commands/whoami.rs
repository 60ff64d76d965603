use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREY, RESET};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match AuthLogic::current_user(&mut pool)? {
        Some(p) => {
            println!("👤 {}", p.name);
            println!("{}• Email:{} {}", CYAN, RESET, p.email);
            if !p.phone.is_empty() {
                println!("{}• Phone:{} {}", CYAN, RESET, p.phone);
            }
            println!("{}• Age:{}   {}", CYAN, RESET, p.age);
            println!("{}• Group:{} {}", CYAN, RESET, p.age_group.label());
        }
        None => {
            println!("{}Not logged in.{}", GREY, RESET);
        }
    }

    Ok(())
}
