//! Tic-tac-toe game engine.
//!
//! A human ([`Mark::Player`]) plays against a computer opponent
//! ([`Mark::Bot`]) on a 3x3 board. The crate is pure game state: it never
//! renders anything and performs no I/O.
//!
//! # Architecture
//!
//! - **Engine**: board, side to move and cumulative score, with move
//!   validation and win/draw evaluation
//! - **Bot**: one-ply greedy opponent (win, else block, else random)
//! - **Session**: the round protocol a front end follows on each click
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, Mark};
//!
//! let mut engine = Engine::new();
//! assert!(engine.apply_move(0, 0, Mark::Player));
//! assert!(!engine.apply_move(0, 0, Mark::Bot));
//! assert!(!engine.apply_move(3, 0, Mark::Bot));
//! assert_eq!(engine.evaluate_winner(), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod position;
mod score;
mod session;
mod types;

pub mod bot;
pub mod invariants;
pub mod rules;

pub use bot::Tier;
pub use engine::Engine;
pub use error::MoveError;
pub use position::Position;
pub use rules::RoundStatus;
pub use score::Score;
pub use session::{RoundOutcome, Session, TurnReport};
pub use types::{Board, Mark, Square, Turn};
