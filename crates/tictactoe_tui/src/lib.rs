//! Terminal UI for tic-tac-toe.
//!
//! Two players share one keyboard. The [`App`] controller turns key presses
//! into game commands and modal prompts; [`ui::draw`] renders it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
pub mod input;
mod logging;
pub mod prompt;
pub mod ui;

pub use app::App;
pub use config::{ConfigError, TuiConfig};
pub use logging::init_tracing;
pub use prompt::Prompt;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Takes over the terminal, plays until the user quits, then restores it.
#[instrument(skip(config))]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Tic Tac Toe TUI exited");
    res
}

/// Draw-then-poll loop. Every key is handled to completion before the next.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if *app.should_quit() {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
    }
}
