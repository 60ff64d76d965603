use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{load_sessions, load_sessions_in_range};
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::utils::date;
use crate::utils::formatting::format_hours;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        now: l_now,
        recent,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let user = AuthLogic::require_user(&mut pool)?;

        let mut sessions = if *l_now {
            let today = date::today();
            load_sessions_in_range(&mut pool, user.id, &today, &today)?
        } else if let Some(p) = period {
            let (from, to) = date::range_bounds(p).map_err(AppError::InvalidDate)?;
            load_sessions_in_range(&mut pool, user.id, &from, &to)?
        } else {
            load_sessions(&mut pool, user.id)?
        };

        // --recent keeps the N newest entries, newest first
        if let Some(n) = recent {
            sessions.reverse();
            sessions.truncate(*n);
        }

        if sessions.is_empty() {
            println!("No sessions found.");
            return Ok(());
        }

        print_sessions(&sessions, cfg);
    }

    Ok(())
}

fn print_sessions(sessions: &[Session], cfg: &Config) {
    let mut table = Table::new(vec!["ID", "DATE", "START", "END", "HOURS", "DESCRIPTION"]);

    let mut total = 0.0;
    for s in sessions {
        total += s.duration_hours;
        table.add_row(vec![
            s.id.to_string(),
            s.date_str(),
            s.start_str(),
            s.end_str(),
            format_hours(s.duration_hours, cfg.hours_precision),
            s.description.clone(),
        ]);
    }

    println!("📅 Volunteer sessions:\n");
    print!("{}", table.render());
    println!(
        "\nTotal: {} hours in {} session(s)",
        format_hours(total, cfg.hours_precision),
        sessions.len()
    );
}
