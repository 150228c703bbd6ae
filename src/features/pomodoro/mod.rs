//! Pomodoro work/break timer.
//!
//! Provides the timer core shared by every view:
//! - Work and break durations with validation
//! - The countdown state machine and its one-second tick
//! - A repeating alarm that sounds until acknowledged
//! - A cooperative scheduler with cancellable timers

pub mod alarm;
pub mod durations;
pub mod engine;
pub mod mode;
pub mod scheduler;
pub mod snapshot;

pub use alarm::{Alarm, DEFAULT_CHIME_INTERVAL};
pub use durations::{
    parse_minutes, validate_minutes, DurationSettings, MAX_MINUTES, MIN_MINUTES, PRESETS,
};
pub use engine::{Engine, Intent, TickOutcome, TICK_INTERVAL};
pub use mode::Mode;
pub use scheduler::{Scheduler, TimerHandle};
pub use snapshot::{format_clock, Snapshot};
