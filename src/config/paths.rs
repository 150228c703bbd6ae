//! Path resolution for focusflow configuration and log files.
//!
//! All focusflow data is stored in `~/.focusflow/` (or `$FOCUSFLOW_HOME`):
//! - `config.yaml` - Main configuration file
//! - `logs/` - Log files

use std::path::PathBuf;

use crate::error::FlowError;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "FOCUSFLOW_HOME";

/// Paths to focusflow configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.focusflow/`
    pub root: PathBuf,
    /// Config file: `~/.focusflow/config.yaml`
    pub config_file: PathBuf,
    /// Logs directory: `~/.focusflow/logs/`
    pub logs: PathBuf,
}

impl Paths {
    /// Resolve paths from `$FOCUSFLOW_HOME`, falling back to `$HOME/.focusflow`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, FlowError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME")
            .map_err(|_| FlowError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".focusflow")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            logs: root.join("logs"),
            root,
        }
    }

    /// Log file inside the logs directory.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.logs.join("focusflow.log")
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FlowError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    FlowError::Config(format!("Failed to create directory {}: {e}", dir.display()))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".focusflow")))
    }
}
