//! Single-line console view.
//!
//! Writes the timer straight to stdout whenever it changes: in pretty mode by
//! rewriting one status line in place, in JSON mode by appending one snapshot
//! per line.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor::MoveToColumn,
    queue,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};

use crate::cli::args::OutputFormat;
use crate::error::FlowError;
use crate::features::pomodoro::Snapshot;
use crate::input::HELP;
use crate::output::format_snapshot;
use crate::session::{poll_key, Control, Session, Ticker, POLL_INTERVAL};

/// Run the console view until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into raw mode or written to.
pub fn run(session: Session, format: OutputFormat) -> Result<(), FlowError> {
    enable_raw_mode().map_err(|e| FlowError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    tracing::info!(?format, "plain view started");

    let mut stdout = io::stdout();
    let result = run_loop(&mut stdout, session, format);

    disable_raw_mode().ok();
    writeln!(stdout).ok();
    tracing::info!("plain view stopped");

    result
}

fn run_loop<W: Write>(
    out: &mut W,
    mut session: Session,
    format: OutputFormat,
) -> Result<(), FlowError> {
    let mut ticker = Ticker::new();
    let mut last: Option<String> = None;

    loop {
        refresh(out, &mut session, ticker.elapsed(), &mut last, format)?;

        let Some(key) = poll_key(POLL_INTERVAL)? else {
            continue;
        };

        match session.handle_key(key)? {
            Control::Quit => break,
            Control::Help => {
                write_help(out)?;
                last = None;
            }
            Control::Continue => {}
        }
    }

    Ok(())
}

/// Let `elapsed` pass and write the line if it changed since `last`.
fn refresh<W: Write>(
    out: &mut W,
    session: &mut Session,
    elapsed: Duration,
    last: &mut Option<String>,
    format: OutputFormat,
) -> Result<(), FlowError> {
    session.advance(elapsed);

    let line = render_line(&session.snapshot(), session.entry(), format)?;
    if last.as_ref() != Some(&line) {
        write_line(out, &line, format)?;
        *last = Some(line);
    }
    Ok(())
}

/// The text shown for a snapshot, including any custom entry in progress.
///
/// # Errors
///
/// Returns `FlowError::Parse` if JSON serialization fails.
pub fn render_line(
    snapshot: &Snapshot,
    entry: Option<&str>,
    format: OutputFormat,
) -> Result<String, FlowError> {
    let mut line = format_snapshot(snapshot, format)?;

    if format == OutputFormat::Pretty {
        if let Some(text) = entry {
            line.push_str(&format!("  custom: [{text}_] min"));
        }
    }

    Ok(line)
}

fn write_line<W: Write>(out: &mut W, line: &str, format: OutputFormat) -> Result<(), FlowError> {
    match format {
        OutputFormat::Pretty => {
            queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            write!(out, "{line}")?;
        }
        // Raw mode does not translate \n, so end lines explicitly
        OutputFormat::Json => write!(out, "{line}\r\n")?,
    }
    out.flush()?;
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> Result<(), FlowError> {
    queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    write!(out, "{HELP}\r\n")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::BellPlayer;
    use crate::features::pomodoro::{format_clock, DurationSettings, Engine, Intent, Mode};

    fn snapshot() -> Snapshot {
        Snapshot {
            formatted_time: format_clock(1500),
            remaining_seconds: 1500,
            mode: Mode::Work,
            running: false,
            alarm_active: false,
            work_minutes: 25,
            break_minutes: 5,
        }
    }

    #[test]
    fn test_render_line_pretty_with_entry() {
        colored::control::set_override(false);
        let line = render_line(&snapshot(), Some("45"), OutputFormat::Pretty).unwrap();
        assert!(line.contains("25:00"));
        assert!(line.ends_with("custom: [45_] min"));
    }

    #[test]
    fn test_render_line_json_ignores_entry() {
        let line = render_line(&snapshot(), Some("45"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["formatted_time"], "25:00");
    }

    #[test]
    fn test_write_line_json_terminates_with_crlf() {
        let mut out = Vec::new();
        write_line(&mut out, "{}", OutputFormat::Json).unwrap();
        assert_eq!(out, b"{}\r\n");
    }

    #[test]
    fn test_write_line_pretty_rewrites_in_place() {
        let mut out = Vec::new();
        write_line(&mut out, "25:00", OutputFormat::Pretty).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with('\u{1b}'));
        assert!(text.ends_with("25:00"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_write_help() {
        let mut out = Vec::new();
        write_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(HELP));
    }

    #[test]
    fn test_json_stream_survives_bell_alarm() {
        let durations = DurationSettings::new(1, 5).unwrap();
        let engine = Engine::new(durations, Mode::Work, Box::new(BellPlayer));
        let mut session = Session::new(engine);
        session.apply(Intent::Start).unwrap();

        let mut out = Vec::new();
        let mut last = None;
        for _ in 0..75 {
            refresh(&mut out, &mut session, Duration::from_secs(1), &mut last, OutputFormat::Json)
                .unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 60);
        for line in &lines {
            assert!(!line.contains('\u{7}'));
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["formatted_time"].is_string());
        }
        assert!(session.snapshot().alarm_active);
        assert_eq!(session.engine().chimes_played(), 4);
    }
}
