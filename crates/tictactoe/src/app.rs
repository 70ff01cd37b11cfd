//! Application state and key handling.
//!
//! Pure state transitions over a [`Session`]; nothing here touches the
//! terminal, so the whole input path is testable.

use crate::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_engine::{Board, Position, RoundOutcome, Score, Session};
use tracing::{debug, info, instrument, warn};

const PLAYERS_TURN: &str = "Player's turn";

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    status_message: String,
    finished_round: Option<RoundOutcome>,
    should_quit: bool,
}

impl App {
    /// Creates an application around a session.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Position::Center,
            status_message: PLAYERS_TURN.to_string(),
            finished_round: None,
            should_quit: false,
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        self.session.engine().board()
    }

    /// Cumulative score.
    pub fn score(&self) -> &Score {
        self.session.score()
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The round awaiting acknowledgement, if one just ended.
    pub fn finished_round(&self) -> Option<&RoundOutcome> {
        self.finished_round.as_ref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            info!("User quit");
            self.should_quit = true;
            return;
        }

        // A finished round stays on screen until any key is pressed.
        if self.finished_round.take().is_some() {
            debug!("Result acknowledged");
            self.status_message = PLAYERS_TURN.to_string();
            return;
        }

        match key {
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    /// Restarts the round. The score is kept.
    pub fn restart(&mut self) {
        debug!("Restarting round");
        self.session.restart();
        self.finished_round = None;
        self.status_message = PLAYERS_TURN.to_string();
    }

    fn place(&mut self, pos: Position) {
        match self.session.play(pos) {
            Ok(report) => {
                if let Some(outcome) = report.outcome() {
                    info!(result = %outcome.result(), score = %self.score(), "Round over");
                    self.status_message = outcome.result().to_string();
                    self.finished_round = Some(outcome.clone());
                } else if let Some((bot_pos, _)) = report.bot_move() {
                    self.status_message =
                        format!("Bot played {}. {}", bot_pos.label(), PLAYERS_TURN);
                }
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status_message = e.to_string();
            }
        }
    }
}
