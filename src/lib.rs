//! Timey library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
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
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Timesheet { .. } => cli::commands::timesheet::handle(&cli.command, cfg),
        Commands::Tasks { .. } => cli::commands::tasks::handle(&cli.command, cfg),
        Commands::Projects { .. } => cli::commands::projects::handle(&cli.command, cfg),
        Commands::Clients { .. } => cli::commands::clients::handle(&cli.command, cfg),
        Commands::Employees { .. } => cli::commands::employees::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load()?;

    // command-line overrides beat the config file
    if let Some(custom_data) = &cli.data {
        cfg.data_file = Some(custom_data.clone());
    }
    if let Some(employee) = cli.employee {
        cfg.default_employee = Some(employee);
    }

    dispatch(&cli, &cfg)
}
