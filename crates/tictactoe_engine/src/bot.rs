//! Computer opponent.
//!
//! A one-ply greedy heuristic: take an immediate win, otherwise block the
//! player's immediate win, otherwise play a uniformly random empty square.
//! It does not look for forks or deeper traps, so it can be beaten.

use super::rules::completes_line;
use super::{Board, Mark, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule of the heuristic produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// The move completes a line for the bot.
    WinNow,
    /// The move occupies the square the player needs to complete a line.
    Block,
    /// No win or block was available.
    Random,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::WinNow => write!(f, "win"),
            Tier::Block => write!(f, "block"),
            Tier::Random => write!(f, "random"),
        }
    }
}

/// Picks the bot's move and reports which rule chose it.
///
/// Win and block squares are searched in row-major order and the first
/// match wins. Returns `None` on a full board.
#[instrument(skip(board, rng))]
pub fn select_move_with_tier<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Option<(Position, Tier)> {
    let empty = Position::valid_moves(board);

    let first_completing = |mark: Mark| {
        empty
            .iter()
            .copied()
            .find(|pos| completes_line(board, *pos, mark))
    };

    let choice = if let Some(pos) = first_completing(Mark::Bot) {
        Some((pos, Tier::WinNow))
    } else if let Some(pos) = first_completing(Mark::Player) {
        Some((pos, Tier::Block))
    } else {
        empty.choose(rng).map(|pos| (*pos, Tier::Random))
    };

    match choice {
        Some((pos, tier)) => debug!(position = %pos, %tier, "Bot chose move"),
        None => debug!("No empty square for the bot"),
    }
    choice
}

/// Picks the bot's move. See [`select_move_with_tier`].
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    select_move_with_tier(board, rng).map(|(pos, _)| pos)
}
