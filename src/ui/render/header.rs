use crate::app::{AppState, ViewMode};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::state::InputMode;

pub(in crate::ui) fn draw_header(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let mode_color = match app.view_mode {
        ViewMode::Admin => Color::Yellow,
        ViewMode::Customer => Color::Green,
    };

    let mut spans = vec![
        Span::styled(
            " plugwatch",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(app.view_mode.label(), Style::default().fg(mode_color)),
    ];

    if app.view_mode == ViewMode::Admin && !app.global.company_name.is_empty() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("Company:", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!(" {} ", app.global.company_name),
            Style::default().fg(Color::White),
        ));
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled("Sort:", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        format!(" {} {} ", app.sort_field.label(), app.sort_direction.arrow()),
        Style::default().fg(Color::Magenta),
    ));

    if !app.search_term.is_empty() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("Filter:", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!(" {} ", app.search_term),
            Style::default().fg(Color::Cyan),
        ));
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled("Plugs:", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        format!(" {} ", app.records.len()),
        Style::default().fg(Color::White),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub(in crate::ui) fn draw_footer(
    frame: &mut ratatui::Frame,
    area: Rect,
    mode: InputMode,
    view_mode: ViewMode,
) {
    let hints = match mode {
        InputMode::Normal => match view_mode {
            ViewMode::Admin => vec![
                ("q", "Quit"),
                ("?", "Help"),
                ("t", "Customer View"),
                ("a", "Add"),
                ("d", "Delete"),
                ("w/u", "Well/UWI"),
                ("i/r", "Dates"),
                ("n", "Company"),
                ("↑↓", "Select"),
            ],
            ViewMode::Customer => vec![
                ("q", "Quit"),
                ("?", "Help"),
                ("t", "Admin Panel"),
                ("/", "Search"),
                ("s", "Sort Well ID"),
                ("o", "Sort Install"),
                ("↑↓", "Select"),
            ],
        },
        InputMode::EditField(_) | InputMode::Company => {
            vec![("Enter", "Apply"), ("Esc", "Cancel")]
        }
        InputMode::Search => vec![("Enter/Esc", "Done"), ("Backspace", "Erase")],
        InputMode::ConfirmDelete => vec![("y", "Delete"), ("n", "Cancel")],
        InputMode::Help => vec![("Esc", "Close")],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!(" {key} "), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{action} "), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(footer, area);
}
