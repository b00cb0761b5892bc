use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::models::raw_row::RawRow;
use crate::utils::time::format_timestamp;
use chrono::{Local, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

/// Append a validated punch. The store never updates or deletes single rows.
pub fn append_event(
    conn: &Connection,
    employee: &str,
    action: Action,
    at: &NaiveDateTime,
    source: &str,
) -> AppResult<i64> {
    append_raw(
        conn,
        &RawRow::new(
            0,
            employee,
            action.to_db_str(),
            &format_timestamp(at),
        ),
        source,
    )
}

/// Append a row as-is (used by import, where values are not validated yet).
pub fn append_raw(conn: &Connection, row: &RawRow, source: &str) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO events (employee, action, timestamp, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    stmt.execute(params![
        row.employee,
        row.action,
        row.timestamp,
        source,
        Local::now().to_rfc3339()
    ])?;
    Ok(conn.last_insert_rowid())
}

fn map_raw(index: usize, row: &Row) -> Result<RawRow> {
    Ok(RawRow {
        index,
        employee: row.get::<_, Option<String>>("employee")?.unwrap_or_default(),
        action: row.get::<_, Option<String>>("action")?.unwrap_or_default(),
        timestamp: row.get::<_, Option<String>>("timestamp")?.unwrap_or_default(),
    })
}

/// Full snapshot of the store in insertion order; `index` is the 0-based row position.
pub fn load_snapshot(pool: &DbPool) -> AppResult<Vec<RawRow>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT employee, action, timestamp FROM events ORDER BY id ASC")?;

    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        out.push(map_raw(out.len(), row)?);
    }
    Ok(out)
}

/// Remove every event. Returns the number of deleted rows.
pub fn clear_events(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM events", [])?;
    Ok(n)
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log(pool: &DbPool) -> Result<Vec<LogEntry>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    rows.collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_keeps_insertion_order_and_raw_values() {
        let pool = DbPool::in_memory().unwrap();
        let at = NaiveDateTime::parse_from_str("2025-03-03 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        append_event(&pool.conn, "anna", Action::CheckIn, &at, "cli").unwrap();
        append_raw(&pool.conn, &RawRow::new(0, "bob", "Lunch", "yesterday"), "import").unwrap();
        pool.conn
            .execute(
                "INSERT INTO events (employee, action, timestamp, created_at) VALUES (NULL, 'Check Out', NULL, 'x')",
                [],
            )
            .unwrap();

        let rows = load_snapshot(&pool).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], RawRow::new(0, "anna", "Check In", "2025-03-03 08:00:00"));
        assert_eq!(rows[1], RawRow::new(1, "bob", "Lunch", "yesterday"));
        assert_eq!(rows[2], RawRow::new(2, "", "Check Out", ""));

        assert_eq!(clear_events(&pool.conn).unwrap(), 3);
        assert!(load_snapshot(&pool).unwrap().is_empty());
    }
}
