//! TOML configuration schema types for wake-clock.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial file fills the rest from built-ins.
//!
//! Duration fields use human-readable strings (e.g. `"1s"`, `"250ms"`)
//! parsed by the `humantime` crate at the call site.

use crate::engine::countdown::DEFAULT_INITIAL_SECONDS;
use crate::engine::DateStyle;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [countdown]
/// [clock]
/// [display]
/// [tui]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Countdown started by the wake-up action.
    pub countdown: CountdownConfig,
    /// Home view clock.
    pub clock: ClockConfig,
    /// Texts and date style shown by the TUI.
    pub display: DisplayConfig,
    /// Terminal event loop settings.
    pub tui: TuiConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// Countdown
// ---------------------------------------------------------------------------

/// `[countdown]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CountdownConfig {
    /// Starting point in seconds. Zero or negative starts finished.
    pub initial_seconds: i64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            initial_seconds: DEFAULT_INITIAL_SECONDS,
        }
    }
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// `[clock]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// Time between clock refreshes (default `"1s"`).
    pub refresh_interval: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            refresh_interval: "1s".to_string(),
        }
    }
}

impl ClockConfig {
    /// Parsed refresh interval, falling back to one second.
    pub fn refresh_interval(&self) -> Duration {
        parse_duration_or(
            "clock.refresh_interval",
            &self.refresh_interval,
            Duration::from_secs(1),
        )
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// `[display]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Greeting shown at the top of the home view.
    pub greeting: String,
    /// Label of the wake-up button.
    pub wake_label: String,
    /// Message shown once the countdown reaches zero.
    pub done_message: String,
    /// Long-form date style.
    pub date_style: DateStyle,
    /// Delay before the dashboard is shown at full intensity (default `"10ms"`).
    pub reveal_delay: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            greeting: "おはようございます".to_string(),
            wake_label: "起床".to_string(),
            done_message: "時間です".to_string(),
            date_style: DateStyle::Japanese,
            reveal_delay: "10ms".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Parsed reveal delay, falling back to ten milliseconds.
    pub fn reveal_delay(&self) -> Duration {
        parse_duration_or(
            "display.reveal_delay",
            &self.reveal_delay,
            Duration::from_millis(10),
        )
    }
}

// ---------------------------------------------------------------------------
// TUI
// ---------------------------------------------------------------------------

/// `[tui]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Render tick rate as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
        }
    }
}

impl TuiConfig {
    /// Parsed tick rate, falling back to 250ms.
    pub fn tick_rate(&self) -> Duration {
        parse_duration_or("tui.tick_rate", &self.tick_rate, Duration::from_millis(250))
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// `[logging]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logging verbosity.
    pub log_level: LogLevel,
    /// Path to log file. Empty string discards log output.
    pub log_file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_file: String::new(),
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Parses a humantime duration, logging and returning `default` when invalid.
pub fn parse_duration_or(field: &str, value: &str, default: Duration) -> Duration {
    match humantime::parse_duration(value) {
        Ok(d) if !d.is_zero() => d,
        Ok(_) => {
            tracing::warn!(field, value, "zero duration not allowed, using default");
            default
        }
        Err(e) => {
            tracing::warn!(field, value, error = %e, "invalid duration, using default");
            default
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
