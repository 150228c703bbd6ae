//! Cooperative scheduler for repeating callbacks.
//!
//! The scheduler keeps its own notion of elapsed time. The host loop feeds it
//! real elapsed time, and due timers are handed back one at a time in due
//! order, so whatever the caller does in response to one firing (including
//! cancelling other timers) is complete before the next firing is looked up.

use std::collections::BTreeMap;
use std::time::Duration;

/// Smallest period a repeating timer may have.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a scheduled repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Repeating {
    period: Duration,
    next_due: Duration,
}

/// A single-threaded set of cancellable repeating timers.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerHandle, Repeating>,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a timer that first fires one `period` from now and then
    /// every `period` after that.
    pub fn every(&mut self, period: Duration) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.insert(
            handle,
            Repeating {
                period,
                next_due: self.now + period,
            },
        );
        handle
    }

    /// Cancel a timer. Returns false if it was not scheduled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(&handle).is_some()
    }

    /// Number of scheduled timers.
    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Whether no timers are scheduled.
    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Pop the earliest firing due at or before `until`.
    ///
    /// The scheduler's clock moves to the firing's due time and the timer is
    /// rearmed one period later. Ties go to the older timer.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerHandle> {
        let (handle, due) = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.next_due <= until)
            .min_by_key(|(handle, timer)| (timer.next_due, **handle))
            .map(|(handle, timer)| (*handle, timer.next_due))?;

        self.now = self.now.max(due);
        if let Some(timer) = self.timers.get_mut(&handle) {
            timer.next_due += timer.period;
        }
        Some(handle)
    }

    /// Move the clock forward to `until` once all due firings are drained.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Cancel every timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}
