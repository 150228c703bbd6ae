//! Repeating expiry alarm.

use std::time::Duration;

use super::scheduler::{Scheduler, TimerHandle};
use crate::audio::ChimePlayer;

/// Default gap between chimes while the alarm is sounding.
pub const DEFAULT_CHIME_INTERVAL: Duration = Duration::from_secs(5);

/// Sounds a chime immediately on start and then every `interval` until
/// stopped.
pub struct Alarm {
    player: Box<dyn ChimePlayer>,
    interval: Duration,
    active: bool,
    handle: Option<TimerHandle>,
    chimes: u64,
}

impl Alarm {
    /// Create an inactive alarm.
    #[must_use]
    pub fn new(player: Box<dyn ChimePlayer>, interval: Duration) -> Self {
        Self {
            player,
            interval,
            active: false,
            handle: None,
            chimes: 0,
        }
    }

    /// Whether the alarm is sounding.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Total chimes emitted over the alarm's lifetime.
    #[must_use]
    pub const fn chimes_played(&self) -> u64 {
        self.chimes
    }

    /// Whether `handle` is this alarm's repeat timer.
    #[must_use]
    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.handle == Some(handle)
    }

    /// Start sounding: one chime now, then one per interval.
    ///
    /// Does nothing if the alarm is already active.
    pub fn start(&mut self, scheduler: &mut Scheduler) {
        if self.active {
            return;
        }

        self.active = true;
        tracing::info!(interval_secs = self.interval.as_secs(), "alarm started");
        self.chime();
        self.handle = Some(scheduler.every(self.interval));
    }

    /// Stop sounding and cancel the repeat timer. Idempotent.
    pub fn stop(&mut self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.handle.take() {
            scheduler.cancel(handle);
        }
        if self.active {
            self.active = false;
            tracing::info!(chimes = self.chimes, "alarm stopped");
        }
    }

    /// Emit one chime. Playback failures are logged, never raised.
    pub fn chime(&mut self) {
        self.chimes += 1;
        if let Err(e) = self.player.play() {
            tracing::warn!(error = %e, "chime playback failed");
        }
    }
}

impl std::fmt::Debug for Alarm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alarm")
            .field("interval", &self.interval)
            .field("active", &self.active)
            .field("handle", &self.handle)
            .field("chimes", &self.chimes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::MockChimePlayer;
    use crate::error::FlowError;

    fn alarm_with(player: MockChimePlayer) -> Alarm {
        Alarm::new(Box::new(player), DEFAULT_CHIME_INTERVAL)
    }

    fn advance(alarm: &mut Alarm, scheduler: &mut Scheduler, elapsed: Duration) {
        let until = scheduler.now() + elapsed;
        while let Some(handle) = scheduler.pop_due(until) {
            if alarm.owns(handle) {
                alarm.chime();
            }
        }
        scheduler.settle(until);
    }

    #[test]
    fn test_start_chimes_immediately() {
        let mut player = MockChimePlayer::new();
        player.expect_play().times(1).returning(|| Ok(()));
        let mut alarm = alarm_with(player);
        let mut scheduler = Scheduler::new();

        alarm.start(&mut scheduler);

        assert!(alarm.is_active());
        assert_eq!(alarm.chimes_played(), 1);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_repeats_every_interval() {
        let mut player = MockChimePlayer::new();
        player.expect_play().times(3).returning(|| Ok(()));
        let mut alarm = alarm_with(player);
        let mut scheduler = Scheduler::new();

        alarm.start(&mut scheduler);
        advance(&mut alarm, &mut scheduler, Duration::from_secs(4));
        assert_eq!(alarm.chimes_played(), 1);
        advance(&mut alarm, &mut scheduler, Duration::from_secs(6));
        assert_eq!(alarm.chimes_played(), 3);
    }

    #[test]
    fn test_start_twice_does_not_double_schedule() {
        let mut player = MockChimePlayer::new();
        player.expect_play().times(1).returning(|| Ok(()));
        let mut alarm = alarm_with(player);
        let mut scheduler = Scheduler::new();

        alarm.start(&mut scheduler);
        alarm.start(&mut scheduler);

        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_stop_cancels_repeat() {
        let mut player = MockChimePlayer::new();
        player.expect_play().times(1).returning(|| Ok(()));
        let mut alarm = alarm_with(player);
        let mut scheduler = Scheduler::new();

        alarm.start(&mut scheduler);
        alarm.stop(&mut scheduler);
        advance(&mut alarm, &mut scheduler, Duration::from_secs(30));

        assert!(!alarm.is_active());
        assert!(scheduler.is_empty());
        assert_eq!(alarm.chimes_played(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut player = MockChimePlayer::new();
        player.expect_play().never();
        let mut alarm = alarm_with(player);
        let mut scheduler = Scheduler::new();

        alarm.stop(&mut scheduler);
        alarm.stop(&mut scheduler);

        assert!(!alarm.is_active());
        assert_eq!(alarm.chimes_played(), 0);
    }

    #[test]
    fn test_playback_failure_keeps_alarm_running() {
        let mut player = MockChimePlayer::new();
        player
            .expect_play()
            .times(2)
            .returning(|| Err(FlowError::Audio("no device".to_string())));
        let mut alarm = alarm_with(player);
        let mut scheduler = Scheduler::new();

        alarm.start(&mut scheduler);
        advance(&mut alarm, &mut scheduler, Duration::from_secs(5));

        assert!(alarm.is_active());
        assert_eq!(alarm.chimes_played(), 2);
    }
}
