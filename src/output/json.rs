use std::path::Path;

use serde::Serialize;
use serde_json::json;

use crate::config::Config;
use crate::error::FlowError;
use crate::features::pomodoro::Snapshot;

/// Format the configuration as JSON
///
/// # Errors
///
/// Returns `FlowError::Parse` if JSON serialization fails.
pub fn format_config_json(config: &Config, path: &Path) -> Result<String, FlowError> {
    let output = json!({
        "path": path,
        "config": config,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a snapshot as a single JSON line
///
/// # Errors
///
/// Returns `FlowError::Parse` if JSON serialization fails.
pub fn format_snapshot_json(snapshot: &Snapshot) -> Result<String, FlowError> {
    Ok(serde_json::to_string(snapshot)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `FlowError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FlowError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::pomodoro::{format_clock, Mode};

    #[test]
    fn test_snapshot_json_is_single_line() {
        let snapshot = Snapshot {
            formatted_time: format_clock(300),
            remaining_seconds: 300,
            mode: Mode::Break,
            running: true,
            alarm_active: false,
            work_minutes: 25,
            break_minutes: 5,
        };

        let line = format_snapshot_json(&snapshot).unwrap();
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["formatted_time"], "05:00");
        assert_eq!(value["mode"], "break");
        assert_eq!(value["running"], true);
    }

    #[test]
    fn test_config_json() {
        let output = format_config_json(&Config::default(), Path::new("/tmp/config.yaml")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["path"], "/tmp/config.yaml");
        assert_eq!(value["config"]["timer"]["work_minutes"], 25);
        assert_eq!(value["config"]["alarm"]["chime"], "alert");
        assert_eq!(value["config"]["interface"]["view"], "tui");
    }
}
