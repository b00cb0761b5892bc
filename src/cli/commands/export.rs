use crate::cli::commands::{open_db, resolve_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::require_admin;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};

pub fn handle(cmd: &Commands, cfg: &Config, admin_password: Option<&str>) -> AppResult<()> {
    if let Commands::Export {
        format,
        kind,
        file,
        filter,
        force,
    } = cmd
    {
        require_admin(cfg, admin_password)?;
        let pool = open_db(cfg)?;
        let (now, filter) = resolve_filter(filter, cfg)?;

        let req = ExportRequest {
            kind: *kind,
            format: *format,
            file,
            range: filter.range,
            employee: filter.employee,
            now,
            force: *force,
        };
        ExportLogic::export(&pool, cfg, &req)?;
    }
    Ok(())
}
