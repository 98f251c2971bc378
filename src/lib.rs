//! wake-clock library
//!
//! A morning wake-up display for the terminal. The home view shows a
//! greeting, today's date and a live clock. Pressing the wake-up button
//! switches, once and for good, to a dashboard that counts down from a
//! configured duration and then shows a completion message.
//!
//! The crate is split into the time-driven engine ([`engine`], orchestrated
//! by [`controller::Controller`]) and the terminal presentation ([`tui`]),
//! which only renders [`controller::DisplaySnapshot`]s and forwards the
//! wake-up intent.

/// Configuration loading, schema and default template.
pub mod config;

/// Orchestration of the time-driven sources.
pub mod controller;

/// Clock, date, countdown and view state.
pub mod engine;

/// Engine error types.
pub mod error;

/// Tracing subscriber setup.
pub mod logging;

/// Terminal user interface.
pub mod tui;

pub use controller::{Controller, DisplaySnapshot, EngineSettings};
pub use error::EngineError;
