//! Application state for the TUI.

use std::time::Duration;

use crossterm::event::KeyEvent;

use crate::error::FlowError;
use crate::features::pomodoro::Snapshot;
use crate::input::HELP;
use crate::session::{Control, Session};

/// Application state.
pub struct App {
    /// The timer and its input state.
    session: Session,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether to mirror the countdown into the terminal title.
    terminal_title: bool,
    /// Last title written, to avoid rewriting it every frame.
    last_title: Option<String>,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(session: Session, terminal_title: bool) -> Self {
        Self {
            session,
            status: Some("Press ? for help".to_string()),
            terminal_title,
            last_title: None,
        }
    }

    /// Current timer state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Custom duration entry in progress.
    #[must_use]
    pub fn entry(&self) -> Option<&str> {
        self.session.entry()
    }

    /// Let real time pass.
    pub fn advance(&mut self, elapsed: Duration) {
        let was_alarm = self.session.engine().is_alarm_active();
        self.session.advance(elapsed);

        if !was_alarm && self.session.engine().is_alarm_active() {
            let next = self.session.engine().mode().toggled();
            self.status = Some(format!(
                "Session complete! Press a to stop the alarm, Tab for {next}"
            ));
        }
    }

    /// Handle a key press.
    ///
    /// Returns true if the app should quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer rejects the action for a reason other
    /// than invalid input.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool, FlowError> {
        match self.session.handle_key(key)? {
            Control::Quit => return Ok(true),
            Control::Help => self.status = Some(HELP.to_string()),
            Control::Continue => {
                if !self.session.engine().is_alarm_active() {
                    self.status = None;
                }
            }
        }
        Ok(false)
    }

    /// New terminal title, if it changed since the last call.
    pub fn title_update(&mut self) -> Option<String> {
        if !self.terminal_title {
            return None;
        }

        let title = self.session.snapshot().title();
        if self.last_title.as_ref() == Some(&title) {
            return None;
        }

        self.last_title = Some(title.clone());
        Some(title)
    }
}
