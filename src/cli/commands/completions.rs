//! Shell completion generation.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::args::Cli;

const BIN_NAME: &str = "focusflow";

/// Write completions for `shell` to `out`.
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

/// Print completions for `shell` to stdout.
pub fn completions(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}
