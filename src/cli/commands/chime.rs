//! Chime command implementation.

use std::thread;
use std::time::Duration;

use crate::audio::{self, ChimeStyle};
use crate::cli::args::OutputFormat;
use crate::error::FlowError;
use crate::output::to_json;

/// Gap after a terminal bell, which has no length of its own.
const BELL_GAP: Duration = Duration::from_millis(500);

/// Play the chime `count` times, one after another.
///
/// Blocks until the last chime has finished so playback is not cut off when
/// the process exits.
///
/// # Errors
///
/// Returns `FlowError::Audio` if a chime cannot be started.
pub fn chime(style: ChimeStyle, count: u32, format: OutputFormat) -> Result<String, FlowError> {
    let player = audio::player_for(style);
    let gap = chime_length(style);

    for _ in 0..count {
        player.play()?;
        thread::sleep(gap);
    }
    tracing::info!(%style, count, "played chime");

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "style": style,
            "count": count,
        })),
        OutputFormat::Pretty => Ok(format!("Played {count} {style} chime(s)")),
    }
}

fn chime_length(style: ChimeStyle) -> Duration {
    match style {
        ChimeStyle::Bell => BELL_GAP,
        ChimeStyle::Silent => Duration::ZERO,
        ChimeStyle::Alert | ChimeStyle::Zen => style.chime().map_or(Duration::ZERO, |c| c.length),
    }
}
