//! Event handling for the TUI.

use crate::error::FlowError;
use crate::session::{poll_key, POLL_INTERVAL};
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, FlowError> {
    // Poll with a short timeout so the countdown keeps moving
    let Some(key) = poll_key(POLL_INTERVAL)? else {
        return Ok(None);
    };

    if app.handle_key(key)? {
        return Ok(Some(Action::Quit));
    }

    Ok(None)
}
