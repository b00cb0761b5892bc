use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::require_admin;
use crate::core::punch::state_label;
use crate::core::report::ReportFilter;
use crate::core::timesheet::TimesheetLogic;
use crate::db::employees::load_credentials;
use crate::errors::{AppError, AppResult};
use crate::models::anomaly::join_flags;
use crate::models::employee::Employee;
use crate::utils::colors::{CYAN, RESET, colorize_flags};
use crate::utils::formatting::mins2readable;
use crate::utils::time::resolve_instant;

pub fn handle(cmd: &Commands, cfg: &Config, admin_password: Option<&str>) -> AppResult<()> {
    if let Commands::Status {
        username,
        password,
        now,
    } = cmd
    {
        let pool = open_db(cfg)?;
        let creds = load_credentials(&pool)?;

        let employee = match password {
            Some(p) => creds.require(username, p)?.clone(),
            None => {
                require_admin(cfg, admin_password)?;
                creds
                    .get(username)
                    .cloned()
                    .ok_or_else(|| AppError::EmployeeNotFound(Employee::normalize_username(username)))?
            }
        };

        let now = resolve_instant(now.as_ref())?;
        let today = now.date();
        let last = TimesheetLogic::last_action(&pool, &employee.username, now)?;

        let filter = ReportFilter {
            employee: Some(employee.username.clone()),
            range: Some((today, today)),
        };
        let report = TimesheetLogic::report(&pool, cfg, now, &filter)?;

        println!("{}👤 {}{} ({})", CYAN, employee.display_name, RESET, employee.username);
        println!("   Date        : {}", today);
        println!("   Status      : {}", state_label(last));
        match report.summaries.first() {
            Some(day) => {
                println!(
                    "   Worked      : {}",
                    mins2readable(day.worked_minutes(), false, false)
                );
                println!(
                    "   Breaks      : {}",
                    mins2readable(day.breaks.num_minutes(), false, false)
                );
                println!(
                    "   Site visits : {}",
                    mins2readable(day.site_visits.num_minutes(), false, false)
                );
                if !day.flags.is_empty() {
                    println!("   Flags       : {}", colorize_flags(&join_flags(&day.flags)));
                }
            }
            None => println!("   Worked      : {}", mins2readable(0, false, false)),
        }
    }

    Ok(())
}
