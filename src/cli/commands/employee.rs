use crate::cli::commands::open_db;
use crate::cli::parser::{Commands, EmployeeCommand};
use crate::config::Config;
use crate::core::auth::require_admin;
use crate::core::employee::EmployeeLogic;
use crate::db::employees::list_employees;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config, admin_password: Option<&str>) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    require_admin(cfg, admin_password)?;
    let pool = open_db(cfg)?;

    match action {
        EmployeeCommand::Add {
            username,
            display_name,
            password,
        } => {
            let e = EmployeeLogic::add(&pool, username, password, display_name)?;
            success(format!("Employee '{}' added ({})", e.username, e.display_name));
        }
        EmployeeCommand::Remove { username } => {
            EmployeeLogic::remove(&pool, username)?;
            success(format!("Employee '{}' removed", username.trim()));
        }
        EmployeeCommand::Passwd { username, password } => {
            EmployeeLogic::change_password(&pool, username, password)?;
            success(format!("Password changed for '{}'", username.trim()));
        }
        EmployeeCommand::List => {
            let employees = list_employees(&pool)?;
            if employees.is_empty() {
                info("No employees registered.");
                return Ok(());
            }
            let mut table = Table::new(vec!["Username", "Display name"]);
            for e in &employees {
                table.add_row(vec![e.username.clone(), e.display_name.clone()]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
