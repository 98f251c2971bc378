//! Main rendering orchestration for the TUI.
//!
//! Provides the top-level `render` function that draws the active view
//! above a one-line footer of key hints.

use crate::engine::View;
use crate::tui::app::App;
use crate::tui::views::dashboard::render_dashboard;
use crate::tui::views::home::render_home;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Footer hints on the home view.
pub const HOME_FOOTER_TEXT: &str = "[Enter] Wake up  [q] Quit";

/// Footer hints on the dashboard.
pub const DASHBOARD_FOOTER_TEXT: &str = "[q] Quit";

/// Version string shown in the footer (right-aligned).
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Renders the active view and the footer.
///
/// Updates `app.wake_button_area` so mouse clicks can be hit-tested against
/// the button drawn in this frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());

    match app.snapshot.view {
        View::Home => {
            let button = render_home(frame, chunks[0], &app.snapshot, &app.texts);
            app.wake_button_area = Some(button);
        }
        View::Dashboard => {
            app.wake_button_area = None;
            render_dashboard(
                frame,
                chunks[0],
                app.snapshot.countdown.as_ref(),
                &app.texts.done_message,
                app.is_revealed(),
            );
        }
    }

    render_footer(frame, chunks[1], app.snapshot.view);
}

fn render_footer(frame: &mut Frame, area: Rect, view: View) {
    let hints = match view {
        View::Home => HOME_FOOTER_TEXT,
        View::Dashboard => DASHBOARD_FOOTER_TEXT,
    };
    frame.render_widget(Paragraph::new(footer_line(hints, area.width as usize)), area);
}

/// Hints on the left, version on the right when there is room for both.
fn footer_line(hints: &'static str, width: usize) -> Line<'static> {
    let hint_style = Style::default().fg(Color::DarkGray);
    let min_width = hints.len() + 2 + VERSION_TEXT.len();
    if width < min_width {
        return Line::from(Span::styled(hints, hint_style));
    }
    let padding = width - hints.len() - VERSION_TEXT.len();
    Line::from(vec![
        Span::styled(hints, hint_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(VERSION_TEXT, hint_style),
    ])
}
