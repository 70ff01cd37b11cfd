//! Move rejection reasons.

use super::Position;

/// Why a move was rejected.
///
/// Rejections never change engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column outside `0..3`.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// A human move was attempted while the bot is to move.
    #[display("It's not the player's turn")]
    NotPlayersTurn,
}

impl std::error::Error for MoveError {}
