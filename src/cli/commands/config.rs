//! Config command implementation.

use std::path::Path;

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::FlowError;
use crate::output::{format_config, to_json};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be written or output
/// formatting fails.
pub fn config(
    cmd: ConfigCommands,
    config: &Config,
    path: &Path,
    format: OutputFormat,
) -> Result<String, FlowError> {
    match cmd {
        ConfigCommands::Show => format_config(config, path, format),
        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&serde_json::json!({
                "path": path,
                "exists": path.exists(),
            })),
            OutputFormat::Pretty => Ok(path.display().to_string()),
        },
        ConfigCommands::Init { force } => init(path, force, format),
    }
}

/// Write a default config file.
fn init(path: &Path, force: bool, format: OutputFormat) -> Result<String, FlowError> {
    if path.exists() && !force {
        return Err(FlowError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to_path(path)?;
    tracing::info!(path = %path.display(), "wrote default config");

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "written": path })),
        OutputFormat::Pretty => Ok(format!(
            "{} Wrote default config to {}",
            "✓".green(),
            path.display()
        )),
    }
}
