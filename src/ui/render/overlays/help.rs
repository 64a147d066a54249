use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use super::super::format::centered_rect;

pub(in crate::ui) fn draw_help_popup(frame: &mut ratatui::Frame, area: Rect) {
    let popup_area = centered_rect(60, 80, area);

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "  Keyboard Shortcuts  ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::styled("─── Navigation ───", Style::default().fg(Color::Yellow)),
        Line::from(vec![
            Span::styled("  Up/Down, j/k  ", Style::default().fg(Color::Green)),
            Span::raw("Select plug record"),
        ]),
        Line::from(vec![
            Span::styled("  t         ", Style::default().fg(Color::Green)),
            Span::raw("Toggle admin / customer view"),
        ]),
        Line::from(""),
        Line::styled("─── Admin View ───", Style::default().fg(Color::Yellow)),
        Line::from(vec![
            Span::styled("  a         ", Style::default().fg(Color::Green)),
            Span::raw("Add an empty plug record"),
        ]),
        Line::from(vec![
            Span::styled("  d         ", Style::default().fg(Color::Green)),
            Span::raw("Delete selected record"),
        ]),
        Line::from(vec![
            Span::styled("  w / u     ", Style::default().fg(Color::Green)),
            Span::raw("Edit Well ID / UWI"),
        ]),
        Line::from(vec![
            Span::styled("  i / r     ", Style::default().fg(Color::Green)),
            Span::raw("Edit install / retrieval date"),
        ]),
        Line::from(vec![
            Span::styled("  n         ", Style::default().fg(Color::Green)),
            Span::raw("Edit company name"),
        ]),
        Line::from(""),
        Line::styled("─── Customer View ───", Style::default().fg(Color::Yellow)),
        Line::from(vec![
            Span::styled("  /         ", Style::default().fg(Color::Green)),
            Span::raw("Search by Well ID or UWI"),
        ]),
        Line::from(vec![
            Span::styled("  s         ", Style::default().fg(Color::Green)),
            Span::raw("Sort by Well ID (press again to reverse)"),
        ]),
        Line::from(vec![
            Span::styled("  o         ", Style::default().fg(Color::Green)),
            Span::raw("Sort by install date (press again to reverse)"),
        ]),
        Line::from(""),
        Line::styled("─── Billing ───", Style::default().fg(Color::Yellow)),
        Line::from(Span::raw(
            "  Partial days bill as full days. Days past the tier",
        )),
        Line::from(Span::raw("  boundary bill at the discounted rate.")),
        Line::from(""),
        Line::styled("─── General ───", Style::default().fg(Color::Yellow)),
        Line::from(vec![
            Span::styled("  ?         ", Style::default().fg(Color::Green)),
            Span::raw("Toggle this help"),
        ]),
        Line::from(vec![
            Span::styled("  q/Ctrl+C  ", Style::default().fg(Color::Green)),
            Span::raw("Quit application"),
        ]),
        Line::from(""),
        Line::styled(
            "  Press Esc or ? to close  ",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .style(Style::default().bg(Color::Black))
        .wrap(Wrap { trim: false });

    frame.render_widget(help, popup_area);
}
