//! Credential table and password hashing.
//!
//! The table is built once at startup from the `employees` table and passed
//! explicitly to whatever needs to authenticate.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Lowercase hex SHA-256 of the password.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    by_username: BTreeMap<String, Employee>,
}

impl Credentials {
    pub fn new(employees: Vec<Employee>) -> Self {
        let by_username = employees
            .into_iter()
            .map(|e| (Employee::normalize_username(&e.username), e))
            .collect();
        Self { by_username }
    }

    pub fn get(&self, username: &str) -> Option<&Employee> {
        self.by_username.get(&Employee::normalize_username(username))
    }

    pub fn contains(&self, username: &str) -> bool {
        self.get(username).is_some()
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Option<&Employee> {
        self.get(username)
            .filter(|e| e.password_hash == hash_password(password))
    }

    /// Same as [`Credentials::authenticate`] but as an error for CLI handlers.
    pub fn require(&self, username: &str, password: &str) -> AppResult<&Employee> {
        self.authenticate(username, password)
            .ok_or_else(|| AppError::AuthFailed(Employee::normalize_username(username)))
    }
}

/// Admin commands pass when the given password matches the configured hash.
pub fn require_admin(cfg: &Config, password: Option<&str>) -> AppResult<()> {
    match password {
        Some(p) if hash_password(p) == cfg.admin_password_hash => Ok(()),
        _ => Err(AppError::AdminRequired),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Credentials {
        Credentials::new(vec![Employee {
            username: "anna".into(),
            display_name: "Anna Rossi".into(),
            password_hash: hash_password("s3cret"),
        }])
    }

    #[test]
    fn sha256_hex_digest() {
        assert_eq!(
            hash_password("admin123"),
            "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9"
        );
    }

    #[test]
    fn authenticates_with_normalized_username() {
        let creds = table();
        let e = creds.authenticate("  ANNA ", "s3cret").unwrap();
        assert_eq!(e.display_name, "Anna Rossi");
        assert!(creds.authenticate("anna", "wrong").is_none());
        assert!(creds.authenticate("bob", "s3cret").is_none());
    }

    #[test]
    fn admin_check_uses_config_hash() {
        let cfg = Config::default();
        assert!(require_admin(&cfg, Some("admin123")).is_ok());
        assert!(require_admin(&cfg, Some("nope")).is_err());
        assert!(require_admin(&cfg, None).is_err());
    }
}
