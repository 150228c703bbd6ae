//! Command implementations for focusflow.
//!
//! Each command returns the text to print, or an empty string when it drove
//! the terminal itself.

mod chime;
mod completions;
mod config;
mod run;

pub use chime::chime;
pub use completions::{completions, write_completions};
pub use config::config;
pub use run::{build_engine, plain, tui};
