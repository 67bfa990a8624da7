//! Tracing subscriber setup
//!
//! The interactive mode owns the terminal, so its logs only ever go to a
//! file. Headless runs log to stderr.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines should go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Off,
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(target: LogTarget<'_>, level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log level {:?}", level))?;

    match target {
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))
                .context("Failed to install log subscriber")?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))
                .context("Failed to install log subscriber")?;
        }
        LogTarget::Off => {}
    }

    Ok(())
}
