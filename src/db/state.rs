//! Keyed single-value store: the current user pointer and open clock
//! entries live here, one row per key.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

pub const CURRENT_USER_KEY: &str = "current_user";

/// State key holding the RFC3339 clock-in instant for one user.
pub fn clock_key(user_id: i64) -> String {
    format!("clock_in:{}", user_id)
}

pub fn get_state(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value: Option<String> = conn
        .query_row("SELECT value FROM state WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}

pub fn set_state(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO state (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn clear_state(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM state WHERE key = ?1", [key])?;
    Ok(())
}
