use crate::core::auth::hash_password;
use crate::db::employees::{delete_employee, insert_employee, update_password};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;

pub struct EmployeeLogic;

impl EmployeeLogic {
    /// Register a new employee; username, password and display name are all required.
    pub fn add(pool: &DbPool, username: &str, password: &str, display_name: &str) -> AppResult<Employee> {
        let username = Employee::normalize_username(username);
        let display_name = display_name.trim();

        if username.is_empty() || password.is_empty() || display_name.is_empty() {
            return Err(AppError::InvalidEmployee(
                "username, password and display name are required".into(),
            ));
        }
        if username.chars().any(char::is_whitespace) {
            return Err(AppError::InvalidEmployee(format!(
                "username '{username}' must not contain spaces"
            )));
        }

        let employee = Employee {
            username,
            display_name: display_name.to_string(),
            password_hash: hash_password(password),
        };
        insert_employee(&pool.conn, &employee)?;
        ttlog(
            &pool.conn,
            "employee_add",
            &employee.username,
            &format!("Added employee '{}'", employee.display_name),
        )?;
        Ok(employee)
    }

    pub fn remove(pool: &DbPool, username: &str) -> AppResult<()> {
        let username = Employee::normalize_username(username);
        delete_employee(&pool.conn, &username)?;
        ttlog(&pool.conn, "employee_del", &username, "Removed employee credentials")?;
        Ok(())
    }

    pub fn change_password(pool: &DbPool, username: &str, password: &str) -> AppResult<()> {
        if password.is_empty() {
            return Err(AppError::InvalidEmployee("password must not be empty".into()));
        }
        let username = Employee::normalize_username(username);
        update_password(&pool.conn, &username, &hash_password(password))?;
        ttlog(&pool.conn, "employee_passwd", &username, "Password changed")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::employees::load_credentials;

    #[test]
    fn add_normalizes_and_validates() {
        let pool = DbPool::in_memory().unwrap();
        let e = EmployeeLogic::add(&pool, "  Anna ", "pw", " Anna Rossi ").unwrap();
        assert_eq!(e.username, "anna");
        assert_eq!(e.display_name, "Anna Rossi");

        assert!(matches!(
            EmployeeLogic::add(&pool, "ANNA", "x", "Other"),
            Err(AppError::EmployeeExists(_))
        ));
        assert!(matches!(
            EmployeeLogic::add(&pool, "bob", "", "Bob"),
            Err(AppError::InvalidEmployee(_))
        ));
        assert!(matches!(
            EmployeeLogic::add(&pool, "bob smith", "pw", "Bob"),
            Err(AppError::InvalidEmployee(_))
        ));

        EmployeeLogic::change_password(&pool, "anna", "new").unwrap();
        assert!(load_credentials(&pool).unwrap().authenticate("anna", "new").is_some());
        EmployeeLogic::remove(&pool, "Anna").unwrap();
        assert!(!load_credentials(&pool).unwrap().contains("anna"));
    }
}
