use crate::core::auth::Credentials;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub fn insert_employee(conn: &Connection, employee: &Employee) -> AppResult<()> {
    let exists: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM employees WHERE username = ?1",
            [&employee.username],
            |r| r.get(0),
        )
        .optional()?;
    if exists.is_some() {
        return Err(AppError::EmployeeExists(employee.username.clone()));
    }

    conn.execute(
        "INSERT INTO employees (username, password_hash, display_name, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            employee.username,
            employee.password_hash,
            employee.display_name,
            Local::now().to_rfc3339()
        ],
    )?;
    Ok(())
}

/// Removes the credential only; the employee's events stay in the store.
pub fn delete_employee(conn: &Connection, username: &str) -> AppResult<()> {
    let n = conn.execute("DELETE FROM employees WHERE username = ?1", [username])?;
    if n == 0 {
        return Err(AppError::EmployeeNotFound(username.to_string()));
    }
    Ok(())
}

pub fn update_password(conn: &Connection, username: &str, password_hash: &str) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE employees SET password_hash = ?1 WHERE username = ?2",
        [password_hash, username],
    )?;
    if n == 0 {
        return Err(AppError::EmployeeNotFound(username.to_string()));
    }
    Ok(())
}

pub fn list_employees(pool: &DbPool) -> AppResult<Vec<Employee>> {
    let mut stmt = pool.conn.prepare(
        "SELECT username, password_hash, display_name FROM employees ORDER BY username ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Employee {
            username: row.get(0)?,
            password_hash: row.get(1)?,
            display_name: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Credential table for this invocation.
pub fn load_credentials(pool: &DbPool) -> AppResult<Credentials> {
    Ok(Credentials::new(list_employees(pool)?))
}
