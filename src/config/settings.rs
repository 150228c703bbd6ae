//! Configuration settings for focusflow.
//!
//! Settings are loaded from `~/.focusflow/config.yaml`.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::audio::ChimeStyle;
use crate::cli::args::{OutputFormat, View};
use crate::error::FlowError;
use crate::features::pomodoro::{
    validate_minutes, DurationSettings, Mode, DEFAULT_CHIME_INTERVAL,
};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Timer settings.
    pub timer: TimerConfig,
    /// Alarm settings.
    pub alarm: AlarmConfig,
    /// View settings.
    pub interface: InterfaceConfig,
    /// Log settings.
    pub logging: LoggingConfig,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Work session length in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Break length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Mode selected at startup.
    #[serde(default)]
    pub start_mode: Mode,
}

/// Alarm settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AlarmConfig {
    /// Chime played when a session ends.
    #[serde(default)]
    pub chime: ChimeStyle,
    /// Seconds between chimes while the alarm sounds.
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,
}

/// View settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InterfaceConfig {
    /// View launched when no command is given.
    #[serde(default)]
    pub view: View,
    /// Show the countdown in the terminal title.
    #[serde(default = "default_true")]
    pub terminal_title: bool,
    /// Default output format.
    #[serde(default)]
    pub default_output: OutputFormat,
}

/// Log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Filter directive, e.g. `info` or `focusflow=debug`.
    #[serde(default = "default_level")]
    pub level: String,
}

// Default value functions for serde
const fn default_work_minutes() -> u32 {
    25
}

const fn default_break_minutes() -> u32 {
    5
}

const fn default_interval_seconds() -> u64 {
    DEFAULT_CHIME_INTERVAL.as_secs()
}

const fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
            start_mode: Mode::Work,
        }
    }
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            chime: ChimeStyle::default(),
            interval_seconds: default_interval_seconds(),
        }
    }
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            view: View::default(),
            terminal_title: default_true(),
            default_output: OutputFormat::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_level(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds out-of-range values.
    pub fn load_from_path(path: &Path) -> Result<Self, FlowError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FlowError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            FlowError::Config(format!("Failed to parse config file {}: {e}", path.display()))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), FlowError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| FlowError::Config(format!("Failed to serialize config: {e}")))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                FlowError::Config(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        std::fs::write(path, contents).map_err(|e| {
            FlowError::Config(format!("Failed to write config file {}: {e}", path.display()))
        })
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Config` naming the first bad value.
    pub fn validate(&self) -> Result<(), FlowError> {
        for (key, minutes) in [
            ("timer.work_minutes", self.timer.work_minutes),
            ("timer.break_minutes", self.timer.break_minutes),
        ] {
            validate_minutes(minutes)
                .map_err(|e| FlowError::Config(format!("{key}: {e}")))?;
        }

        if self.alarm.interval_seconds == 0 {
            return Err(FlowError::Config(
                "alarm.interval_seconds must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Configured work and break lengths.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidDuration` if either length is out of range.
    pub fn durations(&self) -> Result<DurationSettings, FlowError> {
        DurationSettings::new(self.timer.work_minutes, self.timer.break_minutes)
    }

    /// Gap between alarm chimes.
    #[must_use]
    pub const fn chime_interval(&self) -> Duration {
        Duration::from_secs(self.alarm.interval_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.timer.work_minutes, 25);
        assert_eq!(config.timer.break_minutes, 5);
        assert_eq!(config.timer.start_mode, Mode::Work);
        assert_eq!(config.alarm.chime, ChimeStyle::Alert);
        assert_eq!(config.alarm.interval_seconds, 5);
        assert_eq!(config.interface.view, View::Tui);
        assert!(config.interface.terminal_title);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sub").join("config.yaml");

        let mut config = Config::default();
        config.timer.work_minutes = 50;
        config.alarm.chime = ChimeStyle::Zen;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.timer.work_minutes, 50);
        assert_eq!(loaded.alarm.chime, ChimeStyle::Zen);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
timer:
  break_minutes: 10
alarm:
  chime: bell
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.timer.break_minutes, 10);
        assert_eq!(config.alarm.chime, ChimeStyle::Bell);
        // Defaults should be used for missing fields
        assert_eq!(config.timer.work_minutes, 25);
        assert_eq!(config.alarm.interval_seconds, 5);
    }

    #[test]
    fn test_out_of_range_config_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer:\n  work_minutes: 240\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("timer.work_minutes"));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = Config::default();
        config.alarm.interval_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unparseable_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer: [not, a, map]\n").unwrap();

        assert!(Config::load_from_path(&config_path).is_err());
    }

    #[test]
    fn test_durations_and_interval() {
        let config = Config::default();
        let durations = config.durations().unwrap();
        assert_eq!(durations.seconds(Mode::Work), 1500);
        assert_eq!(config.chime_interval(), Duration::from_secs(5));
    }
}
