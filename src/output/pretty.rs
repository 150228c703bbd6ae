use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::features::pomodoro::{Mode, Snapshot};

/// Format the configuration as pretty output
pub fn format_config_pretty(config: &Config, path: &Path) -> String {
    let mut output = format!("{}\n", "Configuration".bold());
    output.push_str(&format!("  {}: {}\n", "File".dimmed(), path.display()));
    output.push_str(&"─".repeat(40));
    output.push('\n');

    output.push_str(&format!(
        "  {}: {} min\n",
        "Work".dimmed(),
        config.timer.work_minutes
    ));
    output.push_str(&format!(
        "  {}: {} min\n",
        "Break".dimmed(),
        config.timer.break_minutes
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Start mode".dimmed(),
        config.timer.start_mode
    ));
    output.push_str(&format!(
        "  {}: {} every {}s\n",
        "Chime".dimmed(),
        config.alarm.chime,
        config.alarm.interval_seconds
    ));
    output.push_str(&format!(
        "  {}: {:?}\n",
        "View".dimmed(),
        config.interface.view
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Terminal title".dimmed(),
        if config.interface.terminal_title { "on" } else { "off" }
    ));

    let logging = if config.logging.enabled {
        config.logging.level.clone()
    } else {
        "off".to_string()
    };
    output.push_str(&format!("  {}: {}\n", "Logging".dimmed(), logging));

    output
}

/// Format a snapshot as a single status line
pub fn format_snapshot_pretty(snapshot: &Snapshot) -> String {
    let icon = if snapshot.alarm_active {
        "⏰"
    } else if snapshot.running {
        "▶"
    } else {
        "⏸"
    };

    let mode = match snapshot.mode {
        Mode::Work => snapshot.mode.display_name().red().bold(),
        Mode::Break => snapshot.mode.display_name().green().bold(),
    };

    let mut line = format!(
        "{} {} {:<5} {}",
        icon,
        snapshot.formatted_time.bold(),
        mode,
        render_progress_bar(snapshot.progress(), 20).dimmed()
    );

    if snapshot.alarm_active {
        line.push_str(&format!("  {}", "Time's up! Press 'a' to stop".yellow()));
    }

    line
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
