use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::audio::ChimeStyle;
use crate::features::pomodoro::{validate_minutes, Mode};

#[derive(Parser)]
#[command(name = "focusflow")]
#[command(about = "A Pomodoro work/break timer for the terminal")]
#[command(long_about = "focusflow - A Pomodoro timer for the terminal

Counts down a work or break session and sounds a repeating chime when it
ends, until you acknowledge it.

QUICK START:
  focusflow                 Open the full-screen timer
  focusflow plain           One-line timer for small terminals or tmux panes
  focusflow tui --work 50   Start with a 50-minute work session
  focusflow config init     Write a default config file

KEYS (both views):
  s/Space start/pause   r reset   w/b/Tab switch mode   a acknowledge alarm
  1/2/3 presets 25/45/60   c custom minutes   ? help   q quit

For more information on a specific command, run:
  focusflow <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file
    #[arg(short, long, global = true, env = "FOCUSFLOW_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Which view renders the timer.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Full-screen terminal interface.
    #[default]
    Tui,
    /// Single status line.
    Plain,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the full-screen timer (default)
    ///
    /// Redraws the whole screen from the timer state every time it changes.
    ///
    /// # Examples
    ///
    ///   focusflow tui
    ///   focusflow tui --mode break --break 10
    ///   focusflow tui --work 50 --autostart
    Tui(RunArgs),

    /// Run the timer on a single status line
    ///
    /// Rewrites one line of output in place. With `-o json` it prints one
    /// JSON snapshot per line instead, for piping into other tools.
    ///
    /// # Examples
    ///
    ///   focusflow plain
    ///   focusflow plain -o json | jq .formatted_time
    Plain(RunArgs),

    /// Inspect or create the config file
    Config(ConfigArgs),

    /// Play the alarm chime to check audio output
    ///
    /// # Examples
    ///
    ///   focusflow chime
    ///   focusflow chime --style zen --count 2
    Chime {
        /// Chime to play (defaults to the configured chime)
        #[arg(long, short = 's', value_enum)]
        style: Option<ChimeStyle>,

        /// Number of chimes
        #[arg(long, short = 'n', default_value_t = 1)]
        count: u32,
    },

    /// Generate shell completions
    ///
    /// Redirect to a file or source directly.
    ///
    /// Example: focusflow completions bash > ~/.bash_completion.d/focusflow
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by both views.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Mode to start in
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<Mode>,

    /// Work session length in minutes (1-180)
    #[arg(long, short = 'w', value_parser = minutes_in_range)]
    pub work: Option<u32>,

    /// Break length in minutes (1-180)
    #[arg(long = "break", short = 'b', value_parser = minutes_in_range)]
    pub break_minutes: Option<u32>,

    /// Alarm chime
    #[arg(long, value_enum)]
    pub chime: Option<ChimeStyle>,

    /// Start counting down immediately
    #[arg(long)]
    pub autostart: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

fn minutes_in_range(s: &str) -> Result<u32, String> {
    let minutes: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a whole number of minutes"))?;

    validate_minutes(minutes).map_err(|e| e.to_string())
}
