use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::age_group::AgeGroup;
use crate::models::profile::Profile;
use rusqlite::{Connection, Result, Row, params};

pub fn map_profile_row(row: &Row) -> Result<Profile> {
    let group_str: String = row.get("age_group")?;

    // Fail fast on anything outside the four known groups. A silent default
    // would hand the wrong thresholds table to the calculator.
    let age_group = AgeGroup::from_db_str(&group_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidAgeGroup(group_str.clone())),
        )
    })?;

    let age: i64 = row.get("age")?;

    Ok(Profile {
        id: row.get("id")?,
        name: row.get("name")?,
        age: age as u32,
        email: row.get("email")?,
        phone: row.get("phone")?,
        age_group,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_user(conn: &Connection, p: &Profile) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (name, age, email, phone, age_group, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            p.name,
            p.age,
            p.email,
            p.phone,
            p.age_group.to_db_str(),
            p.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_user_by_email(pool: &mut DbPool, email: &str) -> AppResult<Option<Profile>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM users WHERE email = ?1 LIMIT 1")?;

    let mut rows = stmt.query_map([email], map_profile_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn load_user_by_id(pool: &mut DbPool, id: i64) -> AppResult<Option<Profile>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM users WHERE id = ?1")?;

    let mut rows = stmt.query_map([id], map_profile_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}
