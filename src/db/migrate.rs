use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists. It doubles as the migration ledger:
/// applied migrations are recorded as `migration_applied` rows.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `users` table.
fn create_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            age        INTEGER NOT NULL,
            email      TEXT NOT NULL UNIQUE,
            phone      TEXT NOT NULL DEFAULT '',
            age_group  TEXT NOT NULL
                       CHECK(age_group IN ('kids','teens','young_adults','adults')),
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `sessions` table with the modern schema.
fn create_sessions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id        INTEGER NOT NULL,
            date           TEXT NOT NULL,
            start_time     TEXT,
            end_time       TEXT,
            duration_hours REAL NOT NULL CHECK(duration_hours >= 0),
            description    TEXT NOT NULL DEFAULT '',
            source         TEXT NOT NULL DEFAULT 'cli',
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_user_date ON sessions(user_id, date);
        "#,
    )?;
    Ok(())
}

/// Create the `state` key/value table (current user, open clock entries).
fn create_state_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS state (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Versioned migration: add the `source` column to sessions created by
/// pre-0.5 databases, where every row was an implicit CLI entry.
fn migrate_add_source_column(conn: &Connection) -> Result<(), Error> {
    let version = "20250921_0007_add_session_source";

    // 1) Skip when already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // 2) Column present already? (fresh databases get it from CREATE TABLE)
    let mut cols = conn.prepare("PRAGMA table_info('sessions')")?;
    let names = cols.query_map([], |row| row.get::<_, String>(1))?;
    let mut has_source = false;
    for c in names {
        if c? == "source" {
            has_source = true;
            break;
        }
    }

    if !has_source {
        conn.execute(
            "ALTER TABLE sessions ADD COLUMN source TEXT NOT NULL DEFAULT 'cli';",
            [],
        )?;
        success(format!(
            "Migration applied: {} → added 'source' to sessions table",
            version
        ));
    }

    // 3) Mark as applied either way
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added source tag to sessions')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table (also the migration ledger)
    ensure_log_table(conn)?;

    // 2) Core tables
    let sessions_existed = table_exists(conn, "sessions")?;

    create_users_table(conn)?;
    create_sessions_table(conn)?;
    create_state_table(conn)?;

    if !sessions_existed {
        success("Created volog tables (modern schema).");
    }

    // 3) Versioned migrations
    migrate_add_source_column(conn)?;

    // 4) Indexes are idempotent; make sure they exist on upgraded databases
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_sessions_user_date ON sessions(user_id, date);",
    )?;

    Ok(())
}
