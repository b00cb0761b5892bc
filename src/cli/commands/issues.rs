use crate::cli::commands::{open_db, resolve_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::require_admin;
use crate::core::issues::{IssueThresholds, find_issues};
use crate::core::timesheet::TimesheetLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config, admin_password: Option<&str>) -> AppResult<()> {
    if let Commands::Issues { filter } = cmd {
        require_admin(cfg, admin_password)?;
        let pool = open_db(cfg)?;
        let (now, filter) = resolve_filter(filter, cfg)?;

        let report = TimesheetLogic::report(&pool, cfg, now, &filter)?;
        let issues = find_issues(
            &report.summaries,
            &report.sessions,
            &IssueThresholds::from_config(cfg),
        );

        if issues.is_empty() {
            success("No issues found.");
            return Ok(());
        }

        header(format!("⚠️  {} potential issue(s)", issues.len()));
        let mut table = Table::new(vec!["Date", "Employee", "Issue", "Details"]);
        for i in &issues {
            table.add_row(vec![
                i.date.to_string(),
                i.employee.clone(),
                i.kind.label().to_string(),
                i.details.clone(),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
