//! Terminal tic-tac-toe against a computer opponent.
//!
//! The presentation layer over [`tictactoe_engine`]: key handling, rendering,
//! settings, and a headless simulator. All game rules live in the engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod simulate;
pub mod tui;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use simulate::Summary;
