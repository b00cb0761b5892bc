pub mod action;
pub mod anomaly;
pub mod day_summary;
pub mod employee;
pub mod event;
pub mod raw_row;
pub mod session;
