//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - play against a computer opponent in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a greedy computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Seed for the bot's random moves
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play rounds headlessly: a random player against the bot
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value = "1000")]
        rounds: u32,

        /// Seed for both the bot and the random player
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The chosen command, `play` with defaults when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            seed: None,
            config: None,
        })
    }
}
