//! The countdown state machine.
//!
//! An [`Engine`] owns the duration settings, the countdown, the alarm, and the
//! scheduler that drives both the one-second tick and the alarm's repeating
//! chime. Views never touch those pieces directly: they send [`Intent`]s and
//! read back a [`Snapshot`].

use std::time::Duration;

use super::alarm::{Alarm, DEFAULT_CHIME_INTERVAL};
use super::durations::DurationSettings;
use super::mode::Mode;
use super::scheduler::{Scheduler, TimerHandle};
use super::snapshot::{format_clock, Snapshot};
use crate::audio::ChimePlayer;
use crate::error::FlowError;

/// Interval between countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// A user action on the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    Pause,
    /// Start if stopped, pause if running.
    Toggle,
    /// Manual reset: also silences the alarm.
    Reset,
    SwitchMode(Mode),
    SetDuration(Mode, u32),
    AcknowledgeAlarm,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running, or had nothing left to count.
    Idle,
    /// One second was taken off the countdown.
    Counted,
    /// The countdown reached zero: the alarm started and the timer reset.
    Expired,
}

/// The Pomodoro timer.
#[derive(Debug)]
pub struct Engine {
    durations: DurationSettings,
    mode: Mode,
    remaining: u32,
    running: bool,
    tick_handle: Option<TimerHandle>,
    alarm: Alarm,
    scheduler: Scheduler,
}

impl Engine {
    /// Create a stopped engine in `mode` with the full duration remaining.
    #[must_use]
    pub fn new(durations: DurationSettings, mode: Mode, player: Box<dyn ChimePlayer>) -> Self {
        Self::with_chime_interval(durations, mode, player, DEFAULT_CHIME_INTERVAL)
    }

    /// Like [`Engine::new`] with a custom gap between alarm chimes.
    #[must_use]
    pub fn with_chime_interval(
        durations: DurationSettings,
        mode: Mode,
        player: Box<dyn ChimePlayer>,
        chime_interval: Duration,
    ) -> Self {
        Self {
            remaining: durations.seconds(mode),
            durations,
            mode,
            running: false,
            tick_handle: None,
            alarm: Alarm::new(player, chime_interval),
            scheduler: Scheduler::new(),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn is_alarm_active(&self) -> bool {
        self.alarm.is_active()
    }

    #[must_use]
    pub const fn durations(&self) -> &DurationSettings {
        &self.durations
    }

    /// Chimes played since the engine was created.
    #[must_use]
    pub const fn chimes_played(&self) -> u64 {
        self.alarm.chimes_played()
    }

    /// Begin counting down. Silences any sounding alarm first.
    pub fn start(&mut self) {
        self.alarm.stop(&mut self.scheduler);
        if self.running {
            return;
        }

        self.running = true;
        self.tick_handle = Some(self.scheduler.every(TICK_INTERVAL));
        tracing::debug!(mode = %self.mode, remaining = self.remaining, "timer started");
    }

    /// Stop counting, keeping the remaining time.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }

        self.halt();
        tracing::debug!(remaining = self.remaining, "timer paused");
    }

    /// Take one second off the countdown.
    ///
    /// Only the tick that takes the countdown from one to zero expires it.
    /// Ticks while stopped do nothing.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.remaining == 0 {
            return TickOutcome::Idle;
        }

        self.remaining -= 1;
        if self.remaining > 0 {
            return TickOutcome::Counted;
        }

        tracing::info!(mode = %self.mode, "session complete");
        self.halt();
        self.alarm.start(&mut self.scheduler);
        self.reset(false);
        TickOutcome::Expired
    }

    /// Restore the full duration for the current mode and stop.
    ///
    /// A manual reset also silences the alarm; the automatic reset after
    /// expiry leaves it sounding.
    pub fn reset(&mut self, manual: bool) {
        self.halt();
        if manual {
            self.alarm.stop(&mut self.scheduler);
        }
        self.remaining = self.durations.seconds(self.mode);
        tracing::debug!(manual, remaining = self.remaining, "timer reset");
    }

    /// Change mode, silencing the alarm and loading the new mode's duration.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.alarm.stop(&mut self.scheduler);
        self.halt();
        self.remaining = self.durations.seconds(mode);
        tracing::debug!(%mode, remaining = self.remaining, "mode switched");
    }

    /// Change the configured length of `mode`.
    ///
    /// If `mode` is the current mode, the countdown is reloaded and stopped.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidDuration` for values outside 1..=180; nothing
    /// changes in that case.
    pub fn set_duration(&mut self, mode: Mode, minutes: u32) -> Result<(), FlowError> {
        self.durations.set(mode, minutes)?;
        tracing::debug!(%mode, minutes, "duration changed");

        if mode == self.mode {
            self.halt();
            self.remaining = self.durations.seconds(mode);
        }
        Ok(())
    }

    /// Silence the alarm without touching the countdown.
    pub fn acknowledge_alarm(&mut self) {
        self.alarm.stop(&mut self.scheduler);
    }

    /// Apply a user action.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidDuration` when a `SetDuration` value is
    /// rejected. The engine state is unchanged in that case.
    pub fn apply(&mut self, intent: Intent) -> Result<(), FlowError> {
        match intent {
            Intent::Start => self.start(),
            Intent::Pause => self.pause(),
            Intent::Toggle if self.running => self.pause(),
            Intent::Toggle => self.start(),
            Intent::Reset => self.reset(true),
            Intent::SwitchMode(mode) => self.switch_mode(mode),
            Intent::SetDuration(mode, minutes) => self.set_duration(mode, minutes)?,
            Intent::AcknowledgeAlarm => self.acknowledge_alarm(),
        }
        Ok(())
    }

    /// Let `elapsed` time pass, firing every tick that falls due.
    ///
    /// Alarm firings are coalesced: one call plays at most one chime, however
    /// many repeats fell inside `elapsed`. Returns the number of timer firings
    /// handled.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let until = self.scheduler.now() + elapsed;
        let chimes_before = self.alarm.chimes_played();
        let mut fired = 0;

        while let Some(handle) = self.scheduler.pop_due(until) {
            fired += 1;
            if self.tick_handle == Some(handle) {
                self.tick();
            } else if self.alarm.owns(handle) {
                let already_chimed = self.alarm.chimes_played() != chimes_before;
                if !already_chimed {
                    self.alarm.chime();
                }
            } else {
                tracing::warn!(?handle, "dropping stray timer");
                self.scheduler.cancel(handle);
            }
        }

        self.scheduler.settle(until);
        fired
    }

    /// Current read model.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            formatted_time: format_clock(self.remaining),
            remaining_seconds: self.remaining,
            mode: self.mode,
            running: self.running,
            alarm_active: self.alarm.is_active(),
            work_minutes: self.durations.minutes(Mode::Work),
            break_minutes: self.durations.minutes(Mode::Break),
        }
    }

    fn halt(&mut self) {
        self.running = false;
        if let Some(handle) = self.tick_handle.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.halt();
        self.alarm.stop(&mut self.scheduler);
        self.scheduler.clear();
    }
}
