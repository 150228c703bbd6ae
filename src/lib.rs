//! focusflow - A Pomodoro timer for the terminal
//!
//! One timer engine drives two views: a full-screen interface and a single
//! status line. When a session ends a chime repeats until acknowledged.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod input;
pub mod logging;
pub mod output;
pub mod plain;
pub mod session;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::FlowError;
pub use features::pomodoro::Engine;
