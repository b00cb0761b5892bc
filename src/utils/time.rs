//! Time utilities: parsing HH:MM and timestamps, resolving "now".

use crate::core::ingest::parse_timestamp;
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Local wall clock, truncated to whole seconds (the stored precision).
pub fn now_local() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// `--now` / `--at` override, or the local wall clock.
pub fn resolve_instant(input: Option<&String>) -> AppResult<NaiveDateTime> {
    match input {
        Some(s) => parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string())),
        None => Ok(now_local()),
    }
}

pub fn format_timestamp(t: &NaiveDateTime) -> String {
    t.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_instant_wins_over_clock() {
        let s = "2025-03-03 17:00".to_string();
        let t = resolve_instant(Some(&s)).unwrap();
        assert_eq!(format_timestamp(&t), "2025-03-03 17:00:00");
        assert!(resolve_instant(Some(&"later".to_string())).is_err());
        assert_eq!(parse_time("08:30"), NaiveTime::from_hms_opt(8, 30, 0));
        assert_eq!(parse_time("8.30"), None);
    }
}
