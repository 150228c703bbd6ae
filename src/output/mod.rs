//! Output formatting for focusflow.
//!
//! This module provides formatters for displaying timer state and settings
//! in various formats.

mod json;
mod pretty;

use std::path::Path;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::FlowError;
use crate::features::pomodoro::Snapshot;

pub use json::*;
pub use pretty::*;

/// Format the configuration based on output format
///
/// # Errors
///
/// Returns `FlowError::Parse` if JSON serialization fails.
pub fn format_config(
    config: &Config,
    path: &Path,
    format: OutputFormat,
) -> Result<String, FlowError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config, path)),
        OutputFormat::Json => format_config_json(config, path),
    }
}

/// Format a timer snapshot based on output format
///
/// # Errors
///
/// Returns `FlowError::Parse` if JSON serialization fails.
pub fn format_snapshot(snapshot: &Snapshot, format: OutputFormat) -> Result<String, FlowError> {
    match format {
        OutputFormat::Pretty => Ok(format_snapshot_pretty(snapshot)),
        OutputFormat::Json => format_snapshot_json(snapshot),
    }
}
