//! Cumulative win counters.

use super::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Wins per side, kept across rounds for the life of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    player_wins: u32,
    bot_wins: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by the player.
    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    /// Rounds won by the bot.
    pub fn bot_wins(&self) -> u32 {
        self.bot_wins
    }

    /// Rounds won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::Player => self.player_wins,
            Mark::Bot => self.bot_wins,
        }
    }

    /// Credits one win to `winner`.
    #[instrument]
    pub fn record(&mut self, winner: Mark) {
        match winner {
            Mark::Player => self.player_wins = self.player_wins.saturating_add(1),
            Mark::Bot => self.bot_wins = self.bot_wins.saturating_add(1),
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player: {} | Bot: {}", self.player_wins, self.bot_wins)
    }
}
