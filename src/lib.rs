//! Factory portal library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (catalog lookup, whitepaper rendering, CSV-backed workflow logs).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod report;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Products { .. } => cli::commands::products::handle(&cli.command, cfg),
        Commands::Search { .. } => cli::commands::search::handle(&cli.command, cfg),
        Commands::Request { .. } => cli::commands::request::handle(cli, cfg),
        Commands::Voc { .. } => cli::commands::voc::handle(cli, cfg),
        Commands::Production { .. } => cli::commands::production::handle(cli, cfg),
        Commands::Docs { .. } => cli::commands::docs::handle(cli, cfg),
        Commands::Ask { .. } => cli::commands::ask::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(cli, cfg),
    }
}

/// Apply the global command-line overrides on top of the loaded configuration.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    if let Some(catalog) = &cli.catalog {
        cfg.catalog_file = Some(catalog.clone());
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and passed down
    let mut cfg = Config::load()?;
    apply_overrides(&cli, &mut cfg);

    dispatch(&cli, &cfg)
}
