//! Logging configuration and initialization

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, trace};

/// Filter directive for a `-v` count
#[must_use]
pub const fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Where log lines should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// Logging disabled (the TUI owns the terminal)
    Off,
}

/// Initialize tracing for the process
///
/// `RUST_LOG` is not consulted; the filter comes from `verbose`.
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init_logging(verbose: u8, target: LogTarget<'_>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_level(verbose))
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_line_number(verbose >= 3); // Show line numbers for -vvv

    match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
    }

    debug!("palabra started with verbosity level: {verbose}");
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    Ok(())
}
