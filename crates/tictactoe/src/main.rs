//! Tic Tac Toe - unified CLI
//!
//! Plays in the terminal or runs a headless simulation.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tictactoe::{Cli, Command, Settings, simulate, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command() {
        Command::Play { seed, config } => run_play(seed, config.as_deref()),
        Command::Simulate { rounds, seed, json } => run_simulate(rounds, seed, json),
    }
}

/// Run the terminal UI
fn run_play(seed: Option<u64>, config: Option<&std::path::Path>) -> Result<()> {
    let settings = Settings::load(config)
        .context("Failed to load settings")?
        .with_seed(seed);

    // Log to a file; the terminal belongs to the UI.
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tui::run_tui(&settings)
}

/// Run a headless simulation and print the tally
fn run_simulate(rounds: u32, seed: Option<u64>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(rounds, ?seed, "Starting simulation");
    let summary = simulate::run(rounds, seed);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
