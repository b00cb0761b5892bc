use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::require_admin;
use crate::core::backup::BackupLogic;
use crate::db::log::ttlog;
use crate::db::queries::clear_events;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::io::{self, Write};

fn confirm() -> AppResult<bool> {
    warning("This deletes ALL recorded events.");
    print!("Type 'yes' to continue: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

pub fn handle(cmd: &Commands, cfg: &Config, admin_password: Option<&str>) -> AppResult<()> {
    if let Commands::Clear { backup, yes } = cmd {
        require_admin(cfg, admin_password)?;

        if !*yes && !confirm()? {
            warning("Clear cancelled.");
            return Ok(());
        }

        if let Some(dest) = backup
            && BackupLogic::backup(&cfg.database, dest, false, *yes)?.is_none()
        {
            warning("Clear cancelled: backup not written.");
            return Ok(());
        }

        let pool = open_db(cfg)?;
        let n = clear_events(&pool.conn)?;
        ttlog(&pool.conn, "clear", "events", &format!("Deleted {} events", n))?;
        success(format!("Deleted {} events.", n));
    }

    Ok(())
}
