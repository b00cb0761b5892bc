use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::require_admin;
use crate::core::period::{week_bounds, weekly_summary};
use crate::core::report::ReportFilter;
use crate::core::timesheet::TimesheetLogic;
use crate::db::employees::list_employees;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::date::parse_date;
use crate::utils::formatting::fmt_hours;
use crate::utils::table::Table;
use crate::utils::time::resolve_instant;

pub fn handle(cmd: &Commands, cfg: &Config, admin_password: Option<&str>) -> AppResult<()> {
    if let Commands::Weekly { week_of, now } = cmd {
        require_admin(cfg, admin_password)?;
        let pool = open_db(cfg)?;

        let now = resolve_instant(now.as_ref())?;
        let day = match week_of {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => now.date(),
        };
        let (from, to) = week_bounds(day);

        let report = TimesheetLogic::report(
            &pool,
            cfg,
            now,
            &ReportFilter {
                employee: None,
                range: Some((from, to)),
            },
        )?;

        // Registered employees first, then anyone else seen in the store that week.
        let mut employees: Vec<String> = list_employees(&pool)?
            .into_iter()
            .map(|e| e.username)
            .collect();
        for d in &report.summaries {
            if !employees.contains(&d.employee) {
                employees.push(d.employee.clone());
            }
        }

        if employees.is_empty() {
            info("No employees registered.");
            return Ok(());
        }

        let rows = weekly_summary(&report.summaries, &employees, day, cfg.standard_day());

        header(format!("📅 Week {} → {}", from, to));
        let mut table = Table::new(vec!["Employee", "Hours", "Breaks", "Site visits", "Overtime"]);
        for r in &rows {
            table.add_row(vec![
                r.employee.clone(),
                fmt_hours(r.hours_worked),
                colorize_optional(&fmt_hours(r.break_hours)),
                colorize_optional(&fmt_hours(r.site_visit_hours)),
                colorize_optional(&fmt_hours(r.overtime_hours)),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
