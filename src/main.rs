use clap::Parser;
use std::path::Path;

mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod store;
mod system;
mod utils;
mod validation;

use crate::cli::Args;
use crate::core::config::Config;
use crate::core::Passbook;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();

    let mut config = Config::load();
    args.apply(&mut config);

    logging::init(&config)?;
    for warning in &config.load_warnings {
        log::warn!("{}", warning);
    }
    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let book = Passbook::from_config(&config);
    log::info!("🔒 Using record store {}", book.store_path().display());

    match args.command {
        Some(command) => cli::handlers::run_command(&book, command),
        None => cli::menu::run_form(&book),
    }
}
