//! Round protocol driving an [`Engine`] from player input.
//!
//! A player move is applied, the round is evaluated (winner, then draw),
//! the bot replies if the round is still open, and the round is evaluated
//! again. A finished round is credited to the winner and the board is
//! reset before control returns. Every front end goes through here so the
//! sequence lives in one place.

use super::bot::{self, Tier};
use super::invariants::{InvariantSet, RoundInvariants};
use super::rules::{RoundStatus, winning_line};
use super::{Board, Engine, Mark, MoveError, Position, Score};
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How a round ended, with the board as it stood before the reset.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// `Won` or `Draw`.
    result: RoundStatus,
    /// Board at the end of the round.
    final_board: Board,
    /// The completed line, for a win.
    winning_line: Option<[Position; 3]>,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        self.result.winner()
    }
}

/// What happened during one player turn.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TurnReport {
    /// Where the player moved.
    player_move: Position,
    /// The bot's reply, unless the player's move ended the round.
    bot_move: Option<(Position, Tier)>,
    /// Set when the round ended during this turn.
    outcome: Option<RoundOutcome>,
}

/// A game session: one engine plus the randomness its bot draws from.
#[derive(Debug, Clone)]
pub struct Session {
    engine: Engine,
    rng: StdRng,
    rounds_played: u32,
    draws: u32,
}

impl Session {
    /// Creates a session with a fresh engine.
    #[instrument(skip(rng))]
    pub fn new(rng: StdRng) -> Self {
        Self {
            engine: Engine::new(),
            rng,
            rounds_played: 0,
            draws: 0,
        }
    }

    /// Creates a session whose bot is reproducible from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a session seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Returns the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the cumulative score.
    pub fn score(&self) -> &Score {
        self.engine.score()
    }

    /// Rounds finished so far.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Rounds that ended in a draw.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Plays the player's move at `pos` and the bot's reply.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] for an occupied square and
    /// [`MoveError::NotPlayersTurn`] if the bot is to move. Nothing changes
    /// on error.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn play(&mut self, pos: Position) -> Result<TurnReport, MoveError> {
        if self.engine.turn() != Mark::Player {
            return Err(MoveError::NotPlayersTurn);
        }
        self.engine.place(pos, Mark::Player)?;
        self.engine.pass_turn();

        if let Some(outcome) = self.finish_if_over() {
            return Ok(TurnReport {
                player_move: pos,
                bot_move: None,
                outcome: Some(outcome),
            });
        }

        let bot_move = bot::select_move_with_tier(self.engine.board(), &mut self.rng);
        if let Some((bot_pos, _)) = bot_move {
            self.engine.place(bot_pos, Mark::Bot)?;
        }

        let outcome = self.finish_if_over();
        if outcome.is_none() {
            self.engine.pass_turn();
            debug_assert!(
                RoundInvariants::check_all(self.engine.board()).is_ok(),
                "round invariants violated"
            );
        }

        Ok(TurnReport {
            player_move: pos,
            bot_move,
            outcome,
        })
    }

    /// Abandons the current round. The score is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Round restarted");
        self.engine.reset();
    }

    /// Ends the round if the last move won or filled the board.
    fn finish_if_over(&mut self) -> Option<RoundOutcome> {
        let result = match self.engine.evaluate_winner() {
            Some(winner) => RoundStatus::Won(winner),
            None if self.engine.is_draw() => RoundStatus::Draw,
            None => return None,
        };

        let final_board = self.engine.board().clone();
        let winning_line = winning_line(&final_board).map(|(_, line)| line);

        match result.winner() {
            Some(winner) => self.engine.record_result(winner),
            None => self.draws += 1,
        }
        self.rounds_played += 1;
        self.engine.reset();

        debug!(%result, rounds = self.rounds_played, "Round finished");
        Some(RoundOutcome {
            result,
            final_board,
            winning_line,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_entropy()
    }
}
