//! rTimesheet library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cmd = &cli.command;
    let admin = cli.admin_password.as_deref();

    match cmd {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(cmd, cfg),
        Commands::Db { .. } => commands::db::handle(cmd, cfg),
        Commands::Log { .. } => commands::log::handle(cmd, cfg),
        Commands::Employee { .. } => commands::employee::handle(cmd, cfg, admin),
        Commands::Punch { .. } => commands::punch::handle(cmd, cfg),
        Commands::Status { .. } => commands::status::handle(cmd, cfg, admin),
        Commands::Report { .. } => commands::report::handle(cmd, cfg, admin),
        Commands::Issues { .. } => commands::issues::handle(cmd, cfg, admin),
        Commands::Weekly { .. } => commands::weekly::handle(cmd, cfg, admin),
        Commands::Monthly { .. } => commands::monthly::handle(cmd, cfg, admin),
        Commands::Payment { .. } => commands::payment::handle(cmd, cfg, admin),
        Commands::Export { .. } => commands::export::handle(cmd, cfg, admin),
        Commands::Import { .. } => commands::import::handle(cmd, cfg, admin),
        Commands::Clear { .. } => commands::clear::handle(cmd, cfg, admin),
        Commands::Backup { .. } => commands::backup::handle(cmd, cfg, admin),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Init writes its own config; everything else reads it once here.
    let mut cfg = if matches!(cli.command, Commands::Init) {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
