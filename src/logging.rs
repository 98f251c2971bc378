//! Logging initialization for wake-clock.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `WAKE_CLOCK_LOG` environment variable, falling back to the configured
//! `logging.log_level`.
//!
//! The TUI owns the terminal, so output goes to `logging.log_file` when set
//! and is discarded otherwise.
//!
//! # Usage
//!
//! ```bash
//! # Debug level into a file
//! WAKE_CLOCK_LOG=debug wake-clock run
//!
//! # Module-specific filtering
//! WAKE_CLOCK_LOG=wake_clock::engine=trace,warn wake-clock run
//! ```

use crate::config::schema::LoggingConfig;
use crate::config::xdg;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "WAKE_CLOCK_LOG";

/// Builds the filter from `WAKE_CLOCK_LOG`, or from `config` when unset or invalid.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_directive()))
}

/// Initialize the tracing subscriber.
///
/// Opens `config.log_file` in append mode (creating parent directories) when
/// set; otherwise log output is discarded.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (should only be
/// called once, at startup).
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    let builder = fmt()
        .with_env_filter(build_filter(config))
        .with_target(false)
        .with_ansi(false);

    if config.log_file.is_empty() {
        builder.with_writer(std::io::sink).init();
        return Ok(());
    }

    let path = xdg::expand_tilde(&config.log_file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    builder.with_writer(Mutex::new(file)).init();
    tracing::debug!(path = %path.display(), "logging to file");
    Ok(())
}
