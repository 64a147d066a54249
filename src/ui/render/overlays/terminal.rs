use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::super::super::state::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};

/// Shown instead of the dashboard when the terminal cannot fit the record
/// table and detail strip.
pub(in crate::ui) fn draw_terminal_too_small(frame: &mut ratatui::Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::styled(
            "Not enough room for the plug table",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("This terminal is "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(", plugwatch needs "),
            Span::styled(
                format!("{MIN_TERMINAL_WIDTH}x{MIN_TERMINAL_HEIGHT}"),
                Style::default().fg(Color::Green),
            ),
            Span::raw(" or more."),
        ]),
        Line::from(""),
        Line::styled(
            "Resize the window to continue, or q to quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" plugwatch ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(paragraph, area);
}
