//! Shared test utilities for TUI testing with ratatui TestBackend.
//!
//! Provides helper functions for creating test terminals, extracting buffer
//! content, asserting colors, and building apps over a fixed clock.

#![cfg(test)]

use crate::config::schema::DisplayConfig;
use crate::controller::{Controller, EngineSettings};
use crate::engine::{DateStyle, FixedClock};
use crate::tui::app::App;
use chrono::NaiveDate;
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};
use std::sync::Arc;
use std::time::Duration;

/// Creates a Terminal with TestBackend at the specified dimensions.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// Extracts all text from a specific row in the buffer as a single String.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area();
    if row >= area.height {
        return String::new();
    }
    (0..area.width)
        .map(|col| {
            buffer
                .cell((col, row))
                .map(|cell| cell.symbol())
                .unwrap_or(" ")
        })
        .collect()
}

/// Checks if a specific row contains the given substring.
pub fn row_contains(buffer: &Buffer, row: u16, text: &str) -> bool {
    row_text(buffer, row).contains(text)
}

/// Finds the first row index that contains the given text, or None if not found.
pub fn find_row_with_text(buffer: &Buffer, text: &str) -> Option<u16> {
    let area = buffer.area();
    (0..area.height).find(|&row| row_contains(buffer, row, text))
}

/// Asserts that the cell at (col, row) has the specified foreground color.
pub fn assert_fg_color(buffer: &Buffer, col: u16, row: u16, color: Color) {
    let cell = buffer
        .cell((col, row))
        .unwrap_or_else(|| panic!("cell at ({}, {}) does not exist", col, row));
    assert_eq!(
        cell.fg, color,
        "expected fg color {:?} at ({}, {}), got {:?}",
        color, col, row, cell.fg
    );
}

/// Finds the first occurrence of `text` in the specified row and checks
/// if the first character of that text has the specified foreground color.
pub fn assert_text_fg_in_row(buffer: &Buffer, row: u16, text: &str, color: Color) {
    let row_string = row_text(buffer, row);
    let col = row_string
        .find(text)
        .unwrap_or_else(|| panic!("text '{}' not found in row {}: '{}'", text, row, row_string));
    assert_fg_color(buffer, col as u16, row, color);
}

/// ASCII display texts; wide characters make row assertions unreliable.
pub fn test_texts() -> DisplayConfig {
    DisplayConfig {
        greeting: "Good morning".to_string(),
        wake_label: "Wake up".to_string(),
        done_message: "Time's up".to_string(),
        date_style: DateStyle::English,
        reveal_delay: "10ms".to_string(),
    }
}

/// Creates an app over a clock frozen at 2026-10-16 06:45:00.
pub fn make_app(initial_seconds: i64) -> App {
    make_app_with_texts(initial_seconds, test_texts())
}

/// Same as [`make_app`] with custom display texts.
pub fn make_app_with_texts(initial_seconds: i64, texts: DisplayConfig) -> App {
    let at = NaiveDate::from_ymd_opt(2026, 10, 16)
        .and_then(|d| d.and_hms_opt(6, 45, 0))
        .expect("valid datetime");
    let settings = EngineSettings {
        initial_seconds,
        clock_interval: Duration::from_secs(1),
        date_style: texts.date_style,
    };
    let controller = Controller::new(settings, Arc::new(FixedClock(at)));
    App::new(controller, texts, Duration::from_millis(250))
}

/// Renders the full UI to a buffer and returns the buffer for inspection.
pub fn render_app_to_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = test_terminal(width, height);
    terminal
        .draw(|frame| {
            crate::tui::ui::render(frame, app);
        })
        .expect("draw failed");
    terminal.backend().buffer().clone()
}
