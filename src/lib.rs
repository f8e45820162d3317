//! rWorktime library root.
//! Exposes the compliance calculator, the CLI parser, the high-level run()
//! function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::{DateTime, Local};
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Start { .. }
        | Commands::Pause
        | Commands::Resume
        | Commands::Stop => cli::commands::tracking::handle(&cli.command, cfg, now),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, now),
        Commands::Timeline { .. } => cli::commands::timeline::handle(&cli.command, cfg, now),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, now),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, now),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE
    let mut cfg = Config::load()?;

    // 3️⃣ command-line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ the instant all compliance figures are computed against
    let now = utils::time::resolve_now(&cli.at)?;

    dispatch(&cli, &cfg, now)
}
