//! The timer as driven by a view.
//!
//! A [`Session`] pairs the engine with keyboard state, and [`Ticker`]
//! measures the real time that passes between trips round a view's loop.
//! Both views run the same cycle: feed elapsed time in, poll a key, apply it,
//! redraw from the snapshot.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::error::FlowError;
use crate::features::pomodoro::{Engine, Intent, Snapshot};
use crate::input::{Action, InputState};

/// How long a view waits for a key before checking the clock again.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a view should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Help,
    Quit,
}

/// An engine plus the input state of the view driving it.
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    input: InputState,
}

impl Session {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            input: InputState::new(),
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Custom duration entry in progress, if any.
    #[must_use]
    pub fn entry(&self) -> Option<&str> {
        self.input.entry()
    }

    /// Let real time pass. Returns true if any timer fired.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.engine.advance(elapsed) > 0
    }

    /// Apply an intent, ignoring rejected duration input.
    ///
    /// # Errors
    ///
    /// Returns any engine error other than invalid input.
    pub fn apply(&mut self, intent: Intent) -> Result<(), FlowError> {
        match self.engine.apply(intent) {
            Err(e) if e.is_invalid_input() => {
                tracing::debug!(error = %e, ?intent, "ignoring invalid input");
                Ok(())
            }
            other => other,
        }
    }

    /// Handle one key press.
    ///
    /// # Errors
    ///
    /// Returns any engine error other than invalid input.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Control, FlowError> {
        let snapshot = self.engine.snapshot();

        match self.input.handle_key(key, &snapshot) {
            Some(Action::Quit) => Ok(Control::Quit),
            Some(Action::Help) => Ok(Control::Help),
            Some(Action::Timer(intent)) => {
                self.apply(intent)?;
                Ok(Control::Continue)
            }
            None => Ok(Control::Continue),
        }
    }
}

/// Measures real time between calls.
#[derive(Debug)]
pub struct Ticker {
    last: Instant,
}

impl Ticker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Time since the previous call (or since creation).
    pub fn elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait up to `timeout` for a key press.
///
/// # Errors
///
/// Returns `FlowError::Terminal` if polling or reading fails.
pub fn poll_key(timeout: Duration) -> Result<Option<KeyEvent>, FlowError> {
    if !event::poll(timeout).map_err(|e| FlowError::Terminal(format!("Event poll failed: {e}")))? {
        return Ok(None);
    }

    match event::read().map_err(|e| FlowError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) => Ok(Some(key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentPlayer;
    use crate::features::pomodoro::{DurationSettings, Mode};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn session() -> Session {
        Session::new(Engine::new(
            DurationSettings::default(),
            Mode::Work,
            Box::new(SilentPlayer),
        ))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_keys_drive_engine() {
        let mut session = session();
        assert_eq!(session.handle_key(key(KeyCode::Char('s'))).unwrap(), Control::Continue);
        assert!(session.snapshot().running);

        assert!(session.advance(Duration::from_secs(3)));
        assert_eq!(session.snapshot().remaining_seconds, 1497);

        session.handle_key(key(KeyCode::Char('b'))).unwrap();
        assert_eq!(session.snapshot().mode, Mode::Break);
        assert_eq!(session.snapshot().remaining_seconds, 300);
    }

    #[test]
    fn test_quit_and_help() {
        let mut session = session();
        assert_eq!(session.handle_key(key(KeyCode::Char('?'))).unwrap(), Control::Help);
        assert_eq!(session.handle_key(key(KeyCode::Char('q'))).unwrap(), Control::Quit);
    }

    #[test]
    fn test_invalid_duration_is_ignored() {
        let mut session = session();
        let before = session.snapshot();

        session.apply(Intent::SetDuration(Mode::Work, 0)).unwrap();
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_custom_entry_through_session() {
        let mut session = session();
        session.handle_key(key(KeyCode::Char('c'))).unwrap();
        session.handle_key(key(KeyCode::Char('9'))).unwrap();
        assert_eq!(session.entry(), Some("9"));

        session.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(session.entry(), None);
        assert_eq!(session.snapshot().remaining_seconds, 540);
    }

    #[test]
    fn test_advance_without_timers() {
        let mut session = session();
        assert!(!session.advance(Duration::from_secs(10)));
    }

    #[test]
    fn test_ticker_is_monotonic() {
        let mut ticker = Ticker::new();
        let first = ticker.elapsed();
        let second = ticker.elapsed();
        assert!(first < Duration::from_secs(1));
        assert!(second < Duration::from_secs(1));
    }
}
