//! Timer view commands.
//!
//! Both `tui` and `plain` build the same engine from config plus command-line
//! overrides, then hand it to a view.

use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::Config;
use crate::error::FlowError;
use crate::features::pomodoro::{Engine, Intent, Mode};
use crate::session::Session;
use crate::{audio, plain, tui};

/// Build the engine for a run, applying overrides on top of the config.
///
/// # Errors
///
/// Returns `FlowError::InvalidDuration` if a configured or overridden length
/// is out of range.
pub fn build_engine(config: &Config, args: &RunArgs) -> Result<Engine, FlowError> {
    let mut durations = config.durations()?;
    if let Some(work) = args.work {
        durations.set(Mode::Work, work)?;
    }
    if let Some(minutes) = args.break_minutes {
        durations.set(Mode::Break, minutes)?;
    }

    let mode = args.mode.unwrap_or(config.timer.start_mode);
    let style = args.chime.unwrap_or(config.alarm.chime);
    tracing::info!(
        %mode,
        work = durations.minutes(Mode::Work),
        break_minutes = durations.minutes(Mode::Break),
        chime = %style,
        "building timer"
    );

    let mut engine = Engine::with_chime_interval(
        durations,
        mode,
        audio::player_for(style),
        config.chime_interval(),
    );

    if args.autostart {
        engine.apply(Intent::Start)?;
    }

    Ok(engine)
}

/// Run the full-screen view.
///
/// # Errors
///
/// Returns an error if the engine cannot be built or the terminal fails.
pub fn tui(config: &Config, args: &RunArgs) -> Result<String, FlowError> {
    let engine = build_engine(config, args)?;
    tui::run(Session::new(engine), config.interface.terminal_title)?;
    Ok(String::new())
}

/// Run the single-line view.
///
/// # Errors
///
/// Returns an error if the engine cannot be built or the terminal fails.
pub fn plain(config: &Config, args: &RunArgs, format: OutputFormat) -> Result<String, FlowError> {
    let engine = build_engine(config, args)?;
    plain::run(Session::new(engine), format)?;
    Ok(String::new())
}
