//! Terminal view for the game engine.
//!
//! The view owns the terminal, renders [`GameView`](crate::games::tictactoe::GameView)
//! snapshots and forwards key presses to the engine. It never changes game
//! state on its own.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{Action, Direction, action_for, move_cursor};

use crate::config::TuiConfig;
use crate::games::tictactoe::GameStateEngine;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the terminal view until the user quits.
#[instrument(skip_all)]
pub fn run(engine: GameStateEngine, config: &TuiConfig) -> Result<()> {
    info!("Starting terminal view");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(engine, config);
    let tick = Duration::from_millis(*config.tick_rate_ms());
    let res = run_app(&mut terminal, app, tick);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = %e, "Terminal view failed");
    }
    info!("Terminal view closed");
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = action_for(key) {
                    app.handle(action);
                }
            }
        }

        if app.should_quit() {
            info!(
                moves = app.engine().history_len() - 1,
                status = %app.view().status_line(),
                "Quitting"
            );
            return Ok(());
        }
    }
}
