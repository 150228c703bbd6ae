//! Chime player implementations.

use std::io::Write;
use std::thread;

use rodio::{OutputStream, Sink};

use super::tone::Chime;
use super::ChimePlayer;
use crate::error::FlowError;

/// Plays a synthesized chime on the default output device.
///
/// Each chime gets its own short-lived thread that opens the device, plays
/// the tone to the end, and exits. Device failures on that thread are logged
/// and otherwise ignored.
#[derive(Debug, Clone, Copy)]
pub struct SpeakerPlayer {
    chime: Chime,
}

impl SpeakerPlayer {
    #[must_use]
    pub const fn new(chime: Chime) -> Self {
        Self { chime }
    }
}

impl ChimePlayer for SpeakerPlayer {
    fn play(&self) -> Result<(), FlowError> {
        let tone = self.chime.tone();

        thread::Builder::new()
            .name("chime".to_string())
            .spawn(move || {
                let Ok((_stream, handle)) = OutputStream::try_default() else {
                    tracing::warn!("no audio output device available");
                    return;
                };
                let sink = match Sink::try_new(&handle) {
                    Ok(sink) => sink,
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to open audio sink");
                        return;
                    }
                };

                sink.append(tone);
                sink.sleep_until_end();
            })
            .map(|_| ())
            .map_err(|e| FlowError::Audio(format!("Failed to start chime thread: {e}")))
    }
}

/// Rings the terminal bell on stderr.
///
/// Stdout carries command output, including the NDJSON stream of
/// `plain -o json`, so the bell never goes there.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellPlayer;

impl BellPlayer {
    fn ring<W: Write>(out: &mut W) -> Result<(), FlowError> {
        out.write_all(b"\x07")
            .and_then(|()| out.flush())
            .map_err(|e| FlowError::Audio(format!("Failed to ring terminal bell: {e}")))
    }
}

impl ChimePlayer for BellPlayer {
    fn play(&self) -> Result<(), FlowError> {
        Self::ring(&mut std::io::stderr())
    }
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl ChimePlayer for SilentPlayer {
    fn play(&self) -> Result<(), FlowError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_writes_bel() {
        let mut out = Vec::new();
        BellPlayer::ring(&mut out).unwrap();
        assert_eq!(out, b"\x07");
    }

    #[test]
    fn test_silent_player() {
        assert!(SilentPlayer.play().is_ok());
    }
}
