//! Alarm chime output.
//!
//! The timer only ever asks for "a chime". How that chime sounds is decided
//! here: a synthesized tone through the default output device, the terminal
//! bell, or nothing at all.

mod player;
mod tone;

pub use player::{BellPlayer, SilentPlayer, SpeakerPlayer};
pub use tone::{Chime, Tone, Waveform, SAMPLE_RATE};

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::FlowError;

/// Something that can emit a single chime.
///
/// Playback is fire-and-forget: `play` returns as soon as the chime has been
/// handed off, and overlapping chimes are allowed.
#[cfg_attr(test, mockall::automock)]
pub trait ChimePlayer {
    /// Emit one chime.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Audio` if the chime could not be started.
    fn play(&self) -> Result<(), FlowError>;
}

/// Which chime the alarm uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChimeStyle {
    /// Triangle wave at 440 Hz with a slow swell.
    #[default]
    Alert,
    /// Sine wave at 528 Hz with a quick bell attack.
    Zen,
    /// The terminal bell character.
    Bell,
    /// No sound.
    Silent,
}

impl ChimeStyle {
    /// The synthesized tone for this style, if it has one.
    #[must_use]
    pub const fn chime(self) -> Option<Chime> {
        match self {
            Self::Alert => Some(Chime::alert()),
            Self::Zen => Some(Chime::zen()),
            Self::Bell | Self::Silent => None,
        }
    }
}

impl fmt::Display for ChimeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Alert => "alert",
            Self::Zen => "zen",
            Self::Bell => "bell",
            Self::Silent => "silent",
        };
        f.write_str(name)
    }
}

/// Build the player for a chime style.
#[must_use]
pub fn player_for(style: ChimeStyle) -> Box<dyn ChimePlayer> {
    match style.chime() {
        Some(chime) => Box::new(SpeakerPlayer::new(chime)),
        None if style == ChimeStyle::Bell => Box::new(BellPlayer),
        None => Box::new(SilentPlayer),
    }
}
