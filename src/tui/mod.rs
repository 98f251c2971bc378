//! TUI module for wake-clock.
//!
//! Provides a terminal user interface built on ratatui and crossterm that
//! renders the controller's display snapshots and forwards the wake-up intent.

pub mod app;
pub mod event;
pub(crate) mod test_utils;
pub mod ui;
pub mod views;
