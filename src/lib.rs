//! fieldpost library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod geo;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Draft { .. } => cli::commands::draft::handle(&cli.command, cfg),
        Commands::Map { .. } => cli::commands::map::handle(&cli.command, cfg),
        Commands::Submit { .. } => cli::commands::submit::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    // Storage override from the command line (tests, custom locations).
    if let Some(custom_db) = &cli.db {
        cfg.database = expand_tilde(custom_db).to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg)
}
