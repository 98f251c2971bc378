use super::*;
use crate::tui::test_utils::{
    assert_text_fg_in_row, find_row_with_text, render_app_to_buffer, test_terminal,
};
use ratatui::buffer::Buffer;

fn render_to_buffer(countdown: Option<&CountdownDisplay>, revealed: bool) -> Buffer {
    let mut terminal = test_terminal(40, 10);
    terminal
        .draw(|frame| {
            render_dashboard(frame, frame.area(), countdown, "Time's up", revealed);
        })
        .expect("draw failed");
    terminal.backend().buffer().clone()
}

#[test]
fn test_remaining_is_white() {
    let remaining = CountdownDisplay::Remaining("00:59:59".to_string());
    let buffer = render_to_buffer(Some(&remaining), true);
    let row = find_row_with_text(&buffer, "00:59:59").expect("countdown");
    assert_text_fg_in_row(&buffer, row, "00:59:59", Color::White);
    let title = find_row_with_text(&buffer, DASHBOARD_TITLE).expect("title");
    assert!(title < row);
}

#[test]
fn test_done_shows_message_in_yellow() {
    let buffer = render_to_buffer(Some(&CountdownDisplay::Done), true);
    let row = find_row_with_text(&buffer, "Time's up").expect("done message");
    assert_text_fg_in_row(&buffer, row, "Time's up", Color::Yellow);
    assert!(find_row_with_text(&buffer, "00:00:00").is_none());
}

#[test]
fn test_dimmed_until_revealed() {
    let remaining = CountdownDisplay::Remaining("01:00:00".to_string());
    let buffer = render_to_buffer(Some(&remaining), false);
    let row = find_row_with_text(&buffer, "01:00:00").expect("countdown");
    assert_text_fg_in_row(&buffer, row, "01:00:00", Color::DarkGray);
}

#[test]
fn test_missing_countdown_shows_placeholder() {
    let line = countdown_line(None, "Time's up", true);
    assert_eq!(line.to_string(), crate::tui::views::home::CLOCK_PLACEHOLDER);
}

#[tokio::test(start_paused = true)]
async fn test_full_ui_after_wake_up() {
    let mut app = crate::tui::test_utils::make_app(3600);
    app.start().expect("runtime available");
    app.wake_up().expect("runtime available");
    let buffer = render_app_to_buffer(&mut app, 50, 12);
    assert!(find_row_with_text(&buffer, "01:00:00").is_some());
    assert!(find_row_with_text(&buffer, "Good morning").is_none());
    assert!(find_row_with_text(&buffer, "Wake up").is_none());
    assert!(find_row_with_text(&buffer, crate::tui::ui::DASHBOARD_FOOTER_TEXT).is_some());
    assert!(app.wake_button_area.is_none());
}
