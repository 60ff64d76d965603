use crate::db::pool::DbPool;
use crate::db::queries::{delete_session, delete_sessions_for_date, load_session_by_id};
use crate::errors::{AppError, AppResult};
use crate::models::profile::Profile;
use crate::ui::messages::info;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a single session by id, scoped to the current user.
    pub fn delete_by_id(pool: &mut DbPool, user: &Profile, id: i64) -> AppResult<()> {
        // Errors with NoSuchSession when the id belongs to someone else.
        let session = load_session_by_id(pool, user.id, id)?;

        delete_session(&pool.conn, session.id)?;

        crate::db::log::vlog(
            &pool.conn,
            "del",
            &format!("session:{}", id),
            &format!("Deleted session on {}", session.date_str()),
        )?;

        info(format!("Deleted session {} ({}).", id, session.date_str()));
        Ok(())
    }

    /// Delete every session the user logged on a date.
    pub fn delete_by_date(pool: &mut DbPool, user: &Profile, date: NaiveDate) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let n = delete_sessions_for_date(&pool.conn, user.id, &date)?;
        if n == 0 {
            return Err(AppError::NoSessionsForDate(date_str));
        }

        crate::db::log::vlog(
            &pool.conn,
            "del",
            &date_str,
            &format!("Deleted {} session(s)", n),
        )?;

        info(format!("Deleted {} session(s) for {}.", n, date));
        Ok(())
    }
}
