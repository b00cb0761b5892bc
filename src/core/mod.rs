pub mod aggregate;
pub mod auth;
pub mod backup;
pub mod config;
pub mod employee;
pub mod ingest;
pub mod issues;
pub mod log;
pub mod period;
pub mod punch;
pub mod reconstruct;
pub mod report;
pub mod timesheet;
