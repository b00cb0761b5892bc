use crate::cli::commands::{open_db, resolve_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::require_admin;
use crate::core::period::monthly_summary;
use crate::core::timesheet::TimesheetLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::fmt_hours;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config, admin_password: Option<&str>) -> AppResult<()> {
    if let Commands::Monthly { filter } = cmd {
        require_admin(cfg, admin_password)?;
        let pool = open_db(cfg)?;
        let (now, filter) = resolve_filter(filter, cfg)?;

        let report = TimesheetLogic::report(&pool, cfg, now, &filter)?;
        let rows = monthly_summary(&report.summaries);

        if rows.is_empty() {
            info("No records for the selected filters.");
            return Ok(());
        }

        header("🗓️  Monthly summary");
        let mut table = Table::new(vec!["Employee", "Year", "Month", "Hours"]);
        for r in &rows {
            table.add_row(vec![
                r.employee.clone(),
                r.year.to_string(),
                r.month.clone(),
                fmt_hours(r.total_hours),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
