//! File logging.
//!
//! Logs go to `~/.focusflow/logs/focusflow.log` and never to the terminal,
//! which belongs to the timer views. `FOCUSFLOW_LOG` takes an `EnvFilter`
//! directive and overrides the configured level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LoggingConfig, Paths};

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "FOCUSFLOW_LOG";

const LOG_FILE_NAME: &str = "focusflow.log";

/// Install the global subscriber.
///
/// The returned guard flushes buffered lines when dropped and must be held
/// until exit. Returns `None` when logging is disabled or the log directory
/// cannot be created; the program runs unlogged in that case.
pub fn init(paths: &Paths, config: &LoggingConfig) -> Option<WorkerGuard> {
    if !config.enabled {
        return None;
    }

    if let Err(e) = paths.ensure_dirs() {
        eprintln!("{e}, logging disabled");
        return None;
    }

    let appender = tracing_appender::rolling::never(&paths.logs, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    // Another subscriber may already be installed, e.g. under test
    if tracing_subscriber::registry()
        .with(filter(config))
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    tracing::info!(log_file = %paths.log_file().display(), "logging initialized");
    Some(guard)
}

fn filter(config: &LoggingConfig) -> EnvFilter {
    directive(std::env::var(LOG_ENV).ok().as_deref(), &config.level)
}

fn directive(env: Option<&str>, level: &str) -> EnvFilter {
    let chosen = env.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(level);
    EnvFilter::try_new(chosen).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directive_prefers_env() {
        let filter = directive(Some("focusflow=trace"), "warn");
        assert_eq!(filter.to_string().to_lowercase(), "focusflow=trace");
    }

    #[test]
    fn test_directive_falls_back_to_config() {
        assert_eq!(directive(None, "debug").to_string().to_lowercase(), "debug");
        assert_eq!(directive(Some("  "), "warn").to_string().to_lowercase(), "warn");
    }

    #[test]
    fn test_disabled_logging_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::with_root(dir.path().join("home"));
        let config = LoggingConfig {
            enabled: false,
            level: "info".to_string(),
        };

        assert!(init(&paths, &config).is_none());
        assert!(!paths.logs.exists());
    }
}
