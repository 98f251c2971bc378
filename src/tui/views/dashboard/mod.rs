//! Dashboard view: the countdown, then the completion message.

use crate::engine::CountdownDisplay;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Heading above the countdown value.
pub const DASHBOARD_TITLE: &str = "Countdown";

/// Returns the text and style for the countdown line.
///
/// Before the reveal delay has passed everything is drawn dimmed.
pub fn countdown_line<'a>(
    countdown: Option<&'a CountdownDisplay>,
    done_message: &'a str,
    revealed: bool,
) -> Line<'a> {
    let (text, style) = match countdown {
        Some(CountdownDisplay::Remaining(value)) => (
            value.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Some(CountdownDisplay::Done) => (
            done_message,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        None => (
            crate::tui::views::home::CLOCK_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ),
    };
    let style = if revealed {
        style
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::styled(text, style)
}

/// Renders the dashboard into `area`.
pub fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    countdown: Option<&CountdownDisplay>,
    done_message: &str,
    revealed: bool,
) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1), // title
        Constraint::Length(1),
        Constraint::Length(1), // value
        Constraint::Fill(1),
    ])
    .split(area);

    let title = Line::styled(DASHBOARD_TITLE, Style::default().fg(Color::Gray));
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(countdown_line(countdown, done_message, revealed))
            .alignment(Alignment::Center),
        chunks[3],
    );
}

#[cfg(test)]
mod tests;
