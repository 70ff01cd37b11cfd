//! Invariants over board state.
//!
//! Invariants are logical properties that must hold throughout a round.
//! They are checked in debug builds and can be tested independently.

use super::rules::LINES;
use super::{Board, Mark, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the player moves first and the two sides alternate, so the
/// player holds as many marks as the bot or exactly one more.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let player = board.count(Mark::Player);
        let bot = board.count(Mark::Bot);
        player == bot || player == bot + 1
    }

    fn description() -> &'static str {
        "Player marks equal bot marks or exceed them by one"
    }
}

/// Invariant: at most one mark has a completed line.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        let completed = |mark: Mark| {
            LINES
                .iter()
                .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(mark)))
        };
        !(completed(Mark::Player) && completed(Mark::Bot))
    }

    fn description() -> &'static str {
        "At most one mark has three in a row"
    }
}

/// Invariant: between a `(before, after)` pair of boards within one round,
/// no occupied square is emptied or overwritten.
pub struct MonotonicBoard;

impl Invariant<(Board, Board)> for MonotonicBoard {
    fn holds((before, after): &(Board, Board)) -> bool {
        is_monotonic(before, after)
    }

    fn description() -> &'static str {
        "Board squares are never overwritten"
    }
}

/// Invariants that hold after every completed turn of a round.
pub type RoundInvariants = (MarkBalance, SingleWinner);

/// Whether `after` only adds marks to `before`.
///
/// Once a square holds a mark it keeps it until the board is reset.
pub fn is_monotonic(before: &Board, after: &Board) -> bool {
    before
        .squares()
        .iter()
        .zip(after.squares())
        .all(|(old, new)| *old == Square::Empty || old == new)
}
