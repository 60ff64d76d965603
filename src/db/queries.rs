use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Result, Row, params};

/// All sessions for one user, oldest first.
pub fn load_sessions(pool: &mut DbPool, user_id: i64) -> AppResult<Vec<Session>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM sessions
         WHERE user_id = ?1
         ORDER BY date ASC, id ASC",
    )?;

    let rows = stmt.query_map([user_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Sessions for one user restricted to an inclusive date range.
pub fn load_sessions_in_range(
    pool: &mut DbPool,
    user_id: i64,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<Session>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM sessions
         WHERE user_id = ?1 AND date >= ?2 AND date <= ?3
         ORDER BY date ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            user_id,
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_session_by_id(pool: &mut DbPool, user_id: i64, id: i64) -> AppResult<Session> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM sessions WHERE id = ?1 AND user_id = ?2")?;

    let mut rows = stmt.query_map(params![id, user_id], map_row)?;

    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::NoSuchSession(id)),
    }
}

pub fn map_row(row: &Row) -> Result<Session> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let start_time = parse_optional_time_col(row, "start_time")?;
    let end_time = parse_optional_time_col(row, "end_time")?;

    // The schema CHECK already guards this; a negative value can only mean a
    // hand-edited database, and it must not leak into totals.
    let duration_hours: f64 = row.get("duration_hours")?;
    if duration_hours < 0.0 {
        return Err(rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Real,
            Box::new(AppError::InvalidDuration(format!(
                "negative duration {} in stored session",
                duration_hours
            ))),
        ));
    }

    Ok(Session {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date,
        start_time,
        end_time,
        duration_hours,
        description: row.get("description")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

fn parse_optional_time_col(row: &Row, col: &str) -> Result<Option<NaiveTime>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        None => Ok(None),
        Some(s) => {
            let parsed = NaiveTime::parse_from_str(&s, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M"));
            match parsed {
                Ok(t) => Ok(Some(t)),
                Err(_) => Err(rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidTime(s)),
                )),
            }
        }
    }
}

pub fn insert_session(conn: &Connection, s: &Session) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO sessions (user_id, date, start_time, end_time, duration_hours, description, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            s.user_id,
            s.date.format("%Y-%m-%d").to_string(),
            s.start_time.map(|t| t.format("%H:%M:%S").to_string()),
            s.end_time.map(|t| t.format("%H:%M:%S").to_string()),
            s.duration_hours,
            s.description,
            s.source,
            s.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a session (all fields except id and user_id).
pub fn update_session(conn: &Connection, s: &Session) -> AppResult<()> {
    conn.execute(
        "UPDATE sessions
         SET date = ?1, start_time = ?2, end_time = ?3,
             duration_hours = ?4, description = ?5,
             source = ?6, created_at = ?7
         WHERE id = ?8",
        params![
            s.date.format("%Y-%m-%d").to_string(),
            s.start_time.map(|t| t.format("%H:%M:%S").to_string()),
            s.end_time.map(|t| t.format("%H:%M:%S").to_string()),
            s.duration_hours,
            s.description,
            s.source,
            s.created_at,
            s.id,
        ],
    )?;
    Ok(())
}

pub fn delete_session(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM sessions WHERE id = ?", [id])?;
    Ok(())
}

/// Delete every session a user logged on one date. Returns the row count.
pub fn delete_sessions_for_date(
    conn: &Connection,
    user_id: i64,
    date: &NaiveDate,
) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM sessions WHERE user_id = ?1 AND date = ?2",
        params![user_id, date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n)
}
