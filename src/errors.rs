//! Unified application error type.
//! Glue modules (db, cli, export, config) return AppError so error handling
//! stays consistent. The reconstruction/aggregation core never fails: data
//! problems there are anomalies, not errors.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Auth & employees
    // ---------------------------
    #[error("Authentication failed for '{0}'")]
    AuthFailed(String),

    #[error("Admin password required or invalid")]
    AdminRequired,

    #[error("Employee '{0}' already exists")]
    EmployeeExists(String),

    #[error("Employee '{0}' not found")]
    EmployeeNotFound(String),

    #[error("Invalid employee data: {0}")]
    InvalidEmployee(String),

    // ---------------------------
    // Punch validation
    // ---------------------------
    #[error("{0}")]
    ActionRejected(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
