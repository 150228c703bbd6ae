//! Configured minute-lengths for each mode.

use super::mode::Mode;
use crate::error::FlowError;

/// Shortest accepted duration in minutes.
pub const MIN_MINUTES: u32 = 1;

/// Longest accepted duration in minutes.
pub const MAX_MINUTES: u32 = 180;

/// One-key presets offered by the views.
pub const PRESETS: [u32; 3] = [25, 45, 60];

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Work and break lengths, in whole minutes.
///
/// Every value held here lies in `MIN_MINUTES..=MAX_MINUTES`; the setters
/// reject anything else and leave the previous value in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationSettings {
    work: u32,
    break_: u32,
}

impl DurationSettings {
    /// Create settings from explicit lengths.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidDuration` if either value is out of range.
    pub fn new(work: u32, break_: u32) -> Result<Self, FlowError> {
        validate_minutes(work)?;
        validate_minutes(break_)?;
        Ok(Self { work, break_ })
    }

    /// Minutes configured for `mode`.
    #[must_use]
    pub const fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work,
            Mode::Break => self.break_,
        }
    }

    /// Seconds configured for `mode`.
    #[must_use]
    pub const fn seconds(&self, mode: Mode) -> u32 {
        self.minutes(mode) * 60
    }

    /// Replace the length for `mode`.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidDuration` if `minutes` is out of range; the
    /// stored value is unchanged in that case.
    pub fn set(&mut self, mode: Mode, minutes: u32) -> Result<(), FlowError> {
        validate_minutes(minutes)?;
        match mode {
            Mode::Work => self.work = minutes,
            Mode::Break => self.break_ = minutes,
        }
        Ok(())
    }
}

impl Default for DurationSettings {
    fn default() -> Self {
        Self {
            work: DEFAULT_WORK_MINUTES,
            break_: DEFAULT_BREAK_MINUTES,
        }
    }
}

/// Check that `minutes` is an accepted duration.
///
/// # Errors
///
/// Returns `FlowError::InvalidDuration` for zero or anything above `MAX_MINUTES`.
pub fn validate_minutes(minutes: u32) -> Result<u32, FlowError> {
    if (MIN_MINUTES..=MAX_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(FlowError::InvalidDuration(format!(
            "{minutes} minutes (must be {MIN_MINUTES}-{MAX_MINUTES})"
        )))
    }
}

/// Parse a custom duration entry like "50" or "50m".
///
/// # Errors
///
/// Returns `FlowError::InvalidDuration` for empty, non-numeric, zero,
/// negative, or out-of-range input.
pub fn parse_minutes(input: &str) -> Result<u32, FlowError> {
    let trimmed = input.trim().to_lowercase();
    let digits = trimmed.strip_suffix('m').unwrap_or(&trimmed).trim_end();

    let minutes: u32 = digits.parse().map_err(|_| {
        FlowError::InvalidDuration(format!("'{}' is not a number of minutes", input.trim()))
    })?;

    validate_minutes(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DurationSettings::default();
        assert_eq!(settings.minutes(Mode::Work), 25);
        assert_eq!(settings.minutes(Mode::Break), 5);
        assert_eq!(settings.seconds(Mode::Work), 1500);
    }

    #[test]
    fn test_set_valid() {
        let mut settings = DurationSettings::default();
        settings.set(Mode::Break, 15).unwrap();
        assert_eq!(settings.minutes(Mode::Break), 15);
        assert_eq!(settings.minutes(Mode::Work), 25);
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let mut settings = DurationSettings::default();
        assert!(settings.set(Mode::Work, 0).is_err());
        assert!(settings.set(Mode::Work, 181).is_err());
        assert_eq!(settings, DurationSettings::default());
    }

    #[test]
    fn test_bounds_inclusive() {
        let mut settings = DurationSettings::default();
        settings.set(Mode::Work, MIN_MINUTES).unwrap();
        settings.set(Mode::Break, MAX_MINUTES).unwrap();
        assert_eq!(settings.seconds(Mode::Break), 180 * 60);
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in PRESETS {
            assert!(validate_minutes(preset).is_ok());
        }
    }

    #[test]
    fn test_new_validates() {
        assert!(DurationSettings::new(50, 10).is_ok());
        assert!(DurationSettings::new(50, 0).is_err());
        assert!(DurationSettings::new(500, 10).is_err());
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("50").unwrap(), 50);
        assert_eq!(parse_minutes(" 90m ").unwrap(), 90);
        assert_eq!(parse_minutes("180").unwrap(), 180);
    }

    #[test]
    fn test_parse_minutes_invalid() {
        assert!(parse_minutes("").is_err());
        assert!(parse_minutes("abc").is_err());
        assert!(parse_minutes("-5").is_err());
        assert!(parse_minutes("0").is_err());
        assert!(parse_minutes("200").is_err());
        assert!(parse_minutes("1h").is_err());
    }
}
