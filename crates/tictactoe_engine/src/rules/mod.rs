//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so the engine, the computer opponent and
//! the invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, completes_line, winning_line};

use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended in a win.
    Won(Mark),
    /// Round ended in a draw.
    Draw,
}

impl RoundStatus {
    /// Evaluates a board: winner first, then fullness.
    ///
    /// A full board with a completed line is a win, never a draw.
    #[instrument(skip(board))]
    pub fn of(board: &Board) -> Self {
        if let Some(winner) = check_winner(board) {
            RoundStatus::Won(winner)
        } else if is_full(board) {
            RoundStatus::Draw
        } else {
            RoundStatus::InProgress
        }
    }

    /// Returns true once the round has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            RoundStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundStatus::InProgress => write!(f, "In progress"),
            RoundStatus::Won(mark) => write!(f, "{} wins!", mark),
            RoundStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}
