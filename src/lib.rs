//! rWorklog library root.
//! Exposes the CLI parser, the high-level run() function, and the ledger,
//! timer, store and export modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
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
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Timer { .. } => cli::commands::timer::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Project { .. } => cli::commands::project::handle(&cli.command, cfg),
        Commands::Owner { .. } => cli::commands::owner::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging diagnostico (RUST_LOG, oppure debug con --verbose)
    logging::init(cli.verbose);

    // 3️⃣ carica config UNA sola volta; `config` deve poter riparare un file rotto
    let mut cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) if matches!(cli.command, Commands::Config { .. }) => {
            ui::messages::warning(format!("{e}; using default settings"));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    // 4️⃣ applica eventuale override della data dir da riga di comando
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // 5️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
