//! Read model handed to the views after every change.

use serde::Serialize;

use super::mode::Mode;

/// Everything a view needs to draw the timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Remaining time as `MM:SS`.
    pub formatted_time: String,
    pub remaining_seconds: u32,
    pub mode: Mode,
    pub running: bool,
    pub alarm_active: bool,
    pub work_minutes: u32,
    pub break_minutes: u32,
}

impl Snapshot {
    /// Window title text, e.g. `"24:59 - Work | Pomodoro"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} - {} | Pomodoro", self.formatted_time, self.mode)
    }

    /// Minutes configured for the current mode.
    #[must_use]
    pub const fn current_minutes(&self) -> u32 {
        match self.mode {
            Mode::Work => self.work_minutes,
            Mode::Break => self.break_minutes,
        }
    }

    /// Fraction of the current session already elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = f64::from(self.current_minutes()) * 60.0;
        if total <= 0.0 {
            return 1.0;
        }
        (1.0 - f64::from(self.remaining_seconds) / total).clamp(0.0, 1.0)
    }
}

/// Format seconds as `MM:SS`. Minutes are not capped at two digits.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
