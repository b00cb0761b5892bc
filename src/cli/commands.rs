//! One handler module per subcommand, plus the helpers they share.

pub mod backup;
pub mod clear;
pub mod config;
pub mod db;
pub mod employee;
pub mod export;
pub mod import;
pub mod init;
pub mod issues;
pub mod log;
pub mod monthly;
pub mod payment;
pub mod punch;
pub mod report;
pub mod status;
pub mod weekly;

use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::core::report::ReportFilter;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::range::parse_range;
use crate::models::employee::Employee;
use crate::utils::time::resolve_instant;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Open the configured database with the schema up to date.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    DbPool::open_migrated(&cfg.database)
}

/// `--range` → inclusive bounds; `all` means unbounded, no value means
/// the last `history_days` days up to `now`.
pub(crate) fn resolve_range(
    range: Option<&str>,
    cfg: &Config,
    now: NaiveDateTime,
) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match range.map(str::trim) {
        Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => Ok(Some(parse_range(r)?)),
        None => {
            let today = now.date();
            let from = Duration::try_days(cfg.history_days.max(1) - 1)
                .and_then(|span| today.checked_sub_signed(span))
                .ok_or_else(|| {
                    AppError::Config(format!("history_days out of range: {}", cfg.history_days))
                })?;
            Ok(Some((from, today)))
        }
    }
}

/// Reference instant and report filter from the shared reporting flags.
pub(crate) fn resolve_filter(
    args: &FilterArgs,
    cfg: &Config,
) -> AppResult<(NaiveDateTime, ReportFilter)> {
    let now = resolve_instant(args.now.as_ref())?;
    let filter = ReportFilter {
        employee: args
            .employee
            .as_deref()
            .map(Employee::normalize_username)
            .filter(|e| !e.is_empty()),
        range: resolve_range(args.range.as_deref(), cfg, now)?,
    };
    Ok((now, filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_covers_history_days() {
        let cfg = Config::default();
        let now = NaiveDateTime::parse_from_str("2025-03-31 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let (from, to) = resolve_range(None, &cfg, now).unwrap().unwrap();
        assert_eq!(to, now.date());
        assert_eq!((to - from).num_days(), cfg.history_days - 1);
        assert_eq!(resolve_range(Some("all"), &cfg, now).unwrap(), None);
    }

    #[test]
    fn oversized_history_is_a_config_error() {
        let mut cfg = Config::default();
        cfg.history_days = 999_999_999_999;
        let now = NaiveDateTime::parse_from_str("2025-03-31 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let err = resolve_range(None, &cfg, now).unwrap_err();
        assert!(err.to_string().contains("history_days out of range"));
        assert!(resolve_range(Some("all"), &cfg, now).unwrap().is_none());
    }
}
