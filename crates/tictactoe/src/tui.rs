//! Terminal front end.

use crate::app::App;
use crate::config::Settings;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe_engine::Session;
use tracing::{error, info, instrument};

/// Runs the TUI until the user quits.
#[instrument(skip_all, fields(seed = ?settings.seed()))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    let session = match settings.seed() {
        Some(seed) => Session::from_seed(*seed),
        None => Session::from_entropy(),
    };

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )?;

    let res = run_app(&mut terminal, App::new(session));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Runs `setup`, calling `restore` if it fails so the terminal is not
/// left in raw mode.
fn setup_or_restore<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed");
        restore();
    })
}

/// Draw, wait for a key, apply it. Every engine call completes before the
/// next frame is drawn.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Ignore release/repeat events reported on some platforms.
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }

        if app.should_quit() {
            info!(score = %app.score(), rounds = app.session().rounds_played(), "Leaving");
            return Ok(());
        }
    }
}
