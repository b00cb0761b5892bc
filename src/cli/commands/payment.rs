use crate::cli::commands::{open_db, resolve_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::require_admin;
use crate::core::period::payment_summary;
use crate::core::timesheet::TimesheetLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::fmt_hours;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config, admin_password: Option<&str>) -> AppResult<()> {
    if let Commands::Payment { filter } = cmd {
        require_admin(cfg, admin_password)?;
        let pool = open_db(cfg)?;
        let (now, filter) = resolve_filter(filter, cfg)?;

        let report = TimesheetLogic::report(&pool, cfg, now, &filter)?;
        let rows = payment_summary(&report.summaries, cfg.standard_day());

        if rows.is_empty() {
            info("No worked hours for the selected filters.");
            return Ok(());
        }

        header(format!(
            "💰 Payment summary ({}h standard day)",
            cfg.standard_work_hours
        ));
        let mut table = Table::new(vec!["Employee", "Total hours", "Total days"]);
        for r in &rows {
            table.add_row(vec![
                r.employee.clone(),
                fmt_hours(r.total_hours),
                fmt_hours(r.total_days),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
