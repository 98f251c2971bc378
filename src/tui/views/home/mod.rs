//! Home view: greeting, today's date, the live clock and the wake-up button.

use crate::config::schema::DisplayConfig;
use crate::controller::DisplaySnapshot;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shown while no clock value has been produced yet.
pub const CLOCK_PLACEHOLDER: &str = "--:--:--";

/// Horizontal padding on each side of the button label.
const BUTTON_PADDING: u16 = 3;

/// Button height including borders.
const BUTTON_HEIGHT: u16 = 3;

/// Renders the home view into `area` and returns the button's area.
pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    snapshot: &DisplaySnapshot,
    texts: &DisplayConfig,
) -> Rect {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1), // greeting
        Constraint::Length(1),
        Constraint::Length(1), // date
        Constraint::Length(1), // clock
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Fill(1),
    ])
    .split(area);

    let greeting = Line::styled(
        texts.greeting.as_str(),
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(
        Paragraph::new(greeting).alignment(Alignment::Center),
        chunks[1],
    );

    let date = Line::styled(
        snapshot.date.as_deref().unwrap_or_default(),
        Style::default().fg(Color::Gray),
    );
    frame.render_widget(Paragraph::new(date).alignment(Alignment::Center), chunks[3]);

    let clock = Line::styled(
        snapshot.time.as_deref().unwrap_or(CLOCK_PLACEHOLDER),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(clock).alignment(Alignment::Center), chunks[4]);

    let label = Line::styled(
        texts.wake_label.as_str(),
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    );
    let button = button_rect(chunks[6], label.width() as u16);
    frame.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        button,
    );
    button
}

/// Centers a bordered button wide enough for `label_width` inside `area`.
pub fn button_rect(area: Rect, label_width: u16) -> Rect {
    let width = label_width
        .saturating_add(BUTTON_PADDING * 2 + 2)
        .min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height.min(BUTTON_HEIGHT))
}
