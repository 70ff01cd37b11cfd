//! Headless self-play: a uniformly random player against the bot.

use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use tictactoe_engine::{Mark, Position, Session};
use tracing::{debug, info, instrument};

/// Tally of a simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Summary {
    /// Rounds played.
    rounds: u32,
    /// Rounds won by the random player.
    player_wins: u32,
    /// Rounds won by the bot.
    bot_wins: u32,
    /// Drawn rounds.
    draws: u32,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rounds: Player {} | Bot {} | Draws {}",
            self.rounds, self.player_wins, self.bot_wins, self.draws
        )
    }
}

/// Plays `rounds` rounds on one session.
///
/// With a seed the whole run is reproducible; the bot draws from `seed`
/// and the random player from `seed + 1`.
#[instrument]
pub fn run(rounds: u32, seed: Option<u64>) -> Summary {
    let (mut session, mut player_rng) = match seed {
        Some(seed) => (
            Session::from_seed(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (Session::from_entropy(), StdRng::from_os_rng()),
    };

    let mut summary = Summary::default();
    while summary.rounds < rounds {
        let free = Position::valid_moves(session.engine().board());
        let Some(pos) = free.choose(&mut player_rng).copied() else {
            // Finished rounds are reset by the session.
            break;
        };

        let Ok(report) = session.play(pos) else {
            continue;
        };
        if let Some(outcome) = report.outcome() {
            summary.rounds += 1;
            match outcome.winner() {
                Some(Mark::Player) => summary.player_wins += 1,
                Some(Mark::Bot) => summary.bot_wins += 1,
                None => summary.draws += 1,
            }
            debug!(round = summary.rounds, result = %outcome.result(), "Round finished");
        }
    }

    info!(%summary, "Simulation complete");
    summary
}
