//! Store-backed entry points used by the report, status and export commands.

use crate::config::Config;
use crate::core::aggregate::Policy;
use crate::core::ingest::ingest;
use crate::core::punch::{check_transition, last_action_on};
use crate::core::report::{Report, ReportFilter, build_report};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{append_event, load_snapshot};
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::models::employee::Employee;
use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;

pub fn policy(cfg: &Config, now: NaiveDateTime) -> Policy {
    Policy {
        late_threshold: cfg.late_threshold_time(),
        reference_now: now,
    }
}

pub struct TimesheetLogic;

impl TimesheetLogic {
    /// Daily summaries and sessions for the current store contents.
    pub fn report(
        pool: &DbPool,
        cfg: &Config,
        now: NaiveDateTime,
        filter: &ReportFilter,
    ) -> AppResult<Report> {
        let rows = load_snapshot(pool)?;
        Ok(build_report(&rows, &policy(cfg, now), filter))
    }

    /// Last action of `employee` on the calendar day of `at`.
    pub fn last_action(pool: &DbPool, employee: &str, at: NaiveDateTime) -> AppResult<Option<Action>> {
        let rows = load_snapshot(pool)?;
        let snapshot = ingest(&rows);
        Ok(last_action_on(&snapshot.events, employee, at.date()))
    }

    /// Validate `action` against today's events, then append it.
    pub fn punch(
        pool: &DbPool,
        employee: &Employee,
        action: Action,
        at: NaiveDateTime,
    ) -> AppResult<()> {
        let last = Self::last_action(pool, &employee.username, at)?;
        check_transition(last, action)?;

        append_event(&pool.conn, &employee.username, action, &at, "cli")?;
        ttlog_soft(
            &pool.conn,
            "punch",
            &employee.username,
            &format!("{} at {}", action, format_timestamp(&at)),
        );
        Ok(())
    }
}
