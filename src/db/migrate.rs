//! Versioned schema migrations.
//!
//! Each migration runs at most once; applied versions are recorded in the
//! `log` table as `migration_applied` rows, the same table `ttlog` writes to.

use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

pub struct Migration {
    pub version: &'static str,
    pub description: &'static str,
    sql: &'static str,
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251015_0001_create_events",
        description: "Created raw events table",
        // No CHECK constraints: malformed rows must reach ingest and be reported there.
        sql: r#"
            CREATE TABLE IF NOT EXISTS events (
                id         INTEGER PRIMARY KEY AUTOINCREMENT,
                employee   TEXT,
                action     TEXT,
                timestamp  TEXT,
                source     TEXT NOT NULL DEFAULT 'cli',
                created_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_events_employee_ts ON events(employee, timestamp);
        "#,
    },
    Migration {
        version: "20251015_0002_create_employees",
        description: "Created employees table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS employees (
                username      TEXT PRIMARY KEY,
                password_hash TEXT NOT NULL,
                display_name  TEXT NOT NULL,
                created_at    TEXT NOT NULL
            );
        "#,
    },
];

/// Ensure that the `log` table exists.
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

pub fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions not yet applied to this database.
pub fn pending(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;
    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    tx.commit()
}

/// Public entry point: run all pending migrations, returning how many ran.
///
/// Invoked by `db::initialize::init_db()` and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        success(format!("Migration applied: {} → {}", m.version, m.description));
        applied += 1;
    }

    Ok(applied)
}
