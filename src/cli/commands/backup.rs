use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::require_admin;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config, admin_password: Option<&str>) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        require_admin(cfg, admin_password)?;
        BackupLogic::backup(&cfg.database, file, *compress, *force)?;
    }

    Ok(())
}
