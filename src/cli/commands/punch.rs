use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timesheet::TimesheetLogic;
use crate::db::employees::load_credentials;
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::ui::messages::{success, warning};
use crate::utils::time::{format_timestamp, resolve_instant};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        username,
        action,
        password,
        at,
    } = cmd
    {
        let pool = open_db(cfg)?;
        let creds = load_credentials(&pool)?;
        let employee = creds.require(username, password)?;
        let at = resolve_instant(at.as_ref())?;

        TimesheetLogic::punch(&pool, employee, *action, at)?;

        success(format!(
            "{}: {} recorded at {}",
            employee.display_name,
            action,
            format_timestamp(&at)
        ));

        let threshold = cfg.late_threshold_time();
        if *action == Action::CheckIn && at.time() > threshold {
            warning(format!(
                "Late arrival: checked in after {}",
                threshold.format("%H:%M")
            ));
        }
    }

    Ok(())
}
