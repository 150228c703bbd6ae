//! Error types for focusflow.

use thiserror::Error;

/// Errors produced by focusflow.
#[derive(Debug, Error)]
pub enum FlowError {
    /// A duration entry was non-numeric, zero, or outside 1..=180 minutes.
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// Audio output could not be initialized or a chime could not be played.
    #[error("Audio unavailable: {0}")]
    Audio(String),

    /// Configuration could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup, drawing, or input failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FlowError {
    /// Whether this error is an ignorable input mistake rather than a failure.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidDuration(_))
    }
}
