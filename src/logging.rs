//! Tracing setup.
//!
//! The TUI owns stdout, so its diagnostics append to `~/.bawi/bawi.log`.
//! CLI subcommands log to stderr instead. Provider failures are logged with
//! full detail on the backend side; the UI only ever sees the reduced
//! message string.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use crate::config;
use crate::error::Result;

/// Initialize file logging for the TUI
pub fn init_file() -> Result<()> {
    let dir = config::bawi_dir();
    fs::create_dir_all(&dir)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("bawi.log"))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    Ok(())
}

/// Initialize stderr logging for one-shot CLI commands
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();
}
