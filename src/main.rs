use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use focusflow::cli::args::{Cli, Commands, RunArgs, View};
use focusflow::cli::commands;
use focusflow::config::{Config, Paths};
use focusflow::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    let config = Config::load_from_path(&config_path)
        .with_context(|| format!("while loading {}", config_path.display()))?;

    let _guard = logging::init(&paths, &config.logging);
    tracing::debug!(config = %config_path.display(), "config loaded");

    let format = cli.output.unwrap_or(config.interface.default_output);

    let output = match cli.command {
        Some(Commands::Tui(args)) => commands::tui(&config, &args)?,
        Some(Commands::Plain(args)) => commands::plain(&config, &args, format)?,
        Some(Commands::Config(args)) => {
            commands::config(args.command, &config, &config_path, format)?
        }
        Some(Commands::Chime { style, count }) => {
            commands::chime(style.unwrap_or(config.alarm.chime), count, format)?
        }
        Some(Commands::Completions { shell }) => {
            commands::completions(shell);
            String::new()
        }
        None => match config.interface.view {
            View::Tui => commands::tui(&config, &RunArgs::default())?,
            View::Plain => commands::plain(&config, &RunArgs::default(), format)?,
        },
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
