//! Terminal User Interface (TUI) for focusflow.
//!
//! Redraws the whole screen from the timer snapshot on every pass of the
//! loop. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;

use crate::error::FlowError;
use crate::session::{Session, Ticker};

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(session: Session, terminal_title: bool) -> Result<(), FlowError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| FlowError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| FlowError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FlowError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(session, terminal_title);
    tracing::info!("tui started");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    if terminal_title {
        execute!(terminal.backend_mut(), SetTitle("")).ok();
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    tracing::info!("tui stopped");

    result
}

/// Run the main application loop.
fn run_app<B: Backend + Write>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), FlowError> {
    let mut ticker = Ticker::new();

    loop {
        app.advance(ticker.elapsed());

        if let Some(title) = app.title_update() {
            execute!(terminal.backend_mut(), SetTitle(title))
                .map_err(|e| FlowError::Terminal(format!("Failed to set title: {e}")))?;
        }

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FlowError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
            }
        }
    }

    Ok(())
}
