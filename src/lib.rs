//! Sitedash library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules: record store, derivation core, export and session state.

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
        Commands::Dashboard => cli::commands::dashboard::handle(cfg),
        Commands::Projects => cli::commands::projects::handle(cfg),
        Commands::Project { .. } => cli::commands::project::handle(&cli.command, cfg),
        Commands::Workers => cli::commands::workers::handle(cfg),
        Commands::Materials => cli::commands::materials::handle(cfg),
        Commands::LogTime { .. }
        | Commands::LogUsage { .. }
        | Commands::AddExpense { .. }
        | Commands::AddReceipt { .. }
        | Commands::AddPayment { .. }
        | Commands::AddTask { .. } => cli::commands::record::handle(&cli.command, cfg),
        Commands::Portal { .. } => cli::commands::portal::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Test mode skips the user config file so CLI tests never touch $HOME.
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    // Dataset override from the command line wins over the config file.
    if let Some(custom_data) = &cli.data {
        cfg.data_file = custom_data.clone();
    }

    dispatch(&cli, &cfg)
}
