//! Key bindings shared by both views.
//!
//! Keys are translated into [`Action`]s against the current [`Snapshot`], so
//! mode-relative bindings (presets, custom minutes, Tab) always target the
//! mode on screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::features::pomodoro::{parse_minutes, Intent, Mode, Snapshot, PRESETS};

/// Longest custom entry accepted, in characters.
const MAX_ENTRY_LEN: usize = 3;

/// Help text listing every binding.
pub const HELP: &str =
    "s:start/pause | r:reset | w/b/Tab:mode | a:stop alarm | 1/2/3:25/45/60m | c:custom | q:quit";

/// Action to take after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Show the key bindings.
    Help,
    /// Send an intent to the timer.
    Timer(Intent),
}

/// Keyboard state that outlives a single key press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    custom: Option<String>,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a custom duration is being typed.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.custom.is_some()
    }

    /// The custom entry typed so far.
    #[must_use]
    pub fn entry(&self) -> Option<&str> {
        self.custom.as_deref()
    }

    /// Translate a key press into an action.
    ///
    /// Returns `None` for keys that only change input state or do nothing.
    pub fn handle_key(&mut self, key: KeyEvent, snapshot: &Snapshot) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.custom.is_some() {
            return self.handle_entry_key(key.code, snapshot);
        }

        let mode = snapshot.mode;
        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') => Action::Help,

            KeyCode::Char('s' | ' ') => Action::Timer(Intent::Toggle),
            KeyCode::Char('p') => Action::Timer(Intent::Pause),
            KeyCode::Char('r') => Action::Timer(Intent::Reset),

            KeyCode::Char('w') => Action::Timer(Intent::SwitchMode(Mode::Work)),
            KeyCode::Char('b') => Action::Timer(Intent::SwitchMode(Mode::Break)),
            KeyCode::Tab => Action::Timer(Intent::SwitchMode(mode.toggled())),

            KeyCode::Char('a') => Action::Timer(Intent::AcknowledgeAlarm),
            KeyCode::Enter if snapshot.alarm_active => Action::Timer(Intent::AcknowledgeAlarm),
            KeyCode::Enter => Action::Timer(Intent::Toggle),

            KeyCode::Char(c @ '1'..='3') => {
                let index = usize::from(c as u8 - b'1');
                Action::Timer(Intent::SetDuration(mode, PRESETS[index]))
            }

            KeyCode::Char('c') => {
                self.custom = Some(String::new());
                return None;
            }

            _ => return None,
        };

        Some(action)
    }

    fn handle_entry_key(&mut self, code: KeyCode, snapshot: &Snapshot) -> Option<Action> {
        let entry = self.custom.as_mut()?;

        match code {
            KeyCode::Char(c) if c.is_ascii_digit() && entry.len() < MAX_ENTRY_LEN => {
                entry.push(c);
                None
            }
            KeyCode::Backspace => {
                entry.pop();
                None
            }
            KeyCode::Esc => {
                self.custom = None;
                None
            }
            KeyCode::Enter => match parse_minutes(entry) {
                Ok(minutes) => {
                    self.custom = None;
                    Some(Action::Timer(Intent::SetDuration(snapshot.mode, minutes)))
                }
                Err(e) => {
                    // Keep the entry so it can be corrected.
                    tracing::debug!(error = %e, "ignoring custom duration");
                    None
                }
            },
            _ => None,
        }
    }
}
