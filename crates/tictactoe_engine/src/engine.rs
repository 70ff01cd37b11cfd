//! The game engine: board, side to move, and score.

use super::bot;
#[cfg(debug_assertions)]
use super::invariants::{Invariant, MonotonicBoard};
use super::rules::{RoundStatus, check_winner, is_full};
use super::{Board, Mark, MoveError, Position, Score, Square, Turn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Holds no reference to any rendering facility. A front end calls in,
/// reads state back, and decides what to draw. The engine does not
/// enforce turn order for the bot; [`crate::Session`] drives the
/// move-reply-evaluate sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    board: Board,
    turn: Turn,
    score: Score,
}

impl Engine {
    /// Creates an engine with an empty board, the player to move, and a zero score.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::Player,
            score: Score::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Sets the side to move.
    pub fn set_turn(&mut self, turn: Turn) {
        self.turn = turn;
    }

    /// Hands the move to the other side.
    pub fn pass_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Returns the cumulative score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// Returns `false` and leaves the engine untouched when the coordinates
    /// are off the board or the square is occupied. Callers must check the
    /// result before assuming the board changed.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: i64, col: i64, mark: Mark) -> bool {
        let result = Position::from_coords(row, col)
            .ok_or(MoveError::OutOfBounds { row, col })
            .and_then(|pos| self.place(pos, mark));

        if let Err(e) = &result {
            debug!(error = %e, "Move rejected");
        }
        result.is_ok()
    }

    /// Places `mark` at `pos`, reporting why a move was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square holds a mark.
    #[instrument(skip_all, fields(position = %pos, mark = %mark))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        #[cfg(debug_assertions)]
        let before = self.board.clone();
        self.board.set(pos, Square::Occupied(mark));
        #[cfg(debug_assertions)]
        debug_assert!(MonotonicBoard::holds(&(before, self.board.clone())));

        debug!("Mark placed");
        Ok(())
    }

    /// Returns the first completed line's mark, or `None` if no line is complete.
    #[instrument(skip(self))]
    pub fn evaluate_winner(&self) -> Option<Mark> {
        check_winner(&self.board)
    }

    /// Returns true when every square is occupied.
    ///
    /// Only a draw once [`Engine::evaluate_winner`] returned `None`.
    #[instrument(skip(self))]
    pub fn is_draw(&self) -> bool {
        is_full(&self.board)
    }

    /// Current round status: winner first, then draw.
    pub fn status(&self) -> RoundStatus {
        RoundStatus::of(&self.board)
    }

    /// Chooses the bot's next square without placing it.
    ///
    /// Returns `None` if the board is full.
    #[instrument(skip(self, rng))]
    pub fn select_computer_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        bot::select_move(&self.board, rng)
    }

    /// Clears the board and gives the move to the player. The score is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Mark::Player;
        info!(score = %self.score, "Board reset");
    }

    /// Credits a finished round to `winner`.
    #[instrument(skip(self))]
    pub fn record_result(&mut self, winner: Mark) {
        self.score.record(winner);
        info!(score = %self.score, "Result recorded");
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::{Invariant, MonotonicBoard};

    #[test]
    fn test_new_engine_is_clean() {
        let engine = Engine::new();
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.turn(), Mark::Player);
        assert_eq!(engine.score(), &Score::new());
        assert_eq!(engine.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_place_reports_occupied() {
        let mut engine = Engine::new();
        engine.place(Position::Center, Mark::Player).unwrap();
        assert_eq!(
            engine.place(Position::Center, Mark::Bot),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(engine.board().get(Position::Center), Square::Occupied(Mark::Player));
    }

    #[test]
    fn test_place_only_adds_marks() {
        let mut engine = Engine::new();
        let mut before = engine.board().clone();
        for (pos, mark) in [
            (Position::Center, Mark::Player),
            (Position::TopLeft, Mark::Bot),
            (Position::BottomRight, Mark::Player),
        ] {
            engine.place(pos, mark).unwrap();
            assert!(MonotonicBoard::holds(&(before, engine.board().clone())));
            before = engine.board().clone();
        }
        assert!(engine.place(Position::TopLeft, Mark::Player).is_err());
        assert!(MonotonicBoard::holds(&(before, engine.board().clone())));
    }

    #[test]
    fn test_pass_turn_alternates() {
        let mut engine = Engine::new();
        engine.pass_turn();
        assert_eq!(engine.turn(), Mark::Bot);
        engine.pass_turn();
        assert_eq!(engine.turn(), Mark::Player);
    }
}
