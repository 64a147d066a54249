use crate::app::{AppState, ViewMode};
use chrono::NaiveDateTime;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use super::super::format::{
    display_well_id, format_cost, format_timestamp, record_status, table_state, truncate_string,
};

/// One row per visible record, each with its own live elapsed and cost
/// readout recomputed every tick.
pub(super) fn draw_record_table(
    frame: &mut ratatui::Frame,
    area: Rect,
    app: &AppState,
    now: NaiveDateTime,
) {
    let visible = app.visible_records();
    if visible.is_empty() {
        draw_empty_state(frame, area, app);
        return;
    }

    let header = Row::new(vec![
        Span::raw(""),
        Span::styled("Well ID", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("UWI", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("Install", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("Retrieval", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("Elapsed", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("Cost", Style::default().add_modifier(Modifier::BOLD)),
    ]);

    let rows = visible.iter().map(|(_, record)| {
        let (glyph, glyph_style) = record_status(record);
        let elapsed = app
            .record_elapsed(record, now)
            .map(|elapsed| elapsed.to_string())
            .unwrap_or_else(|| "—".to_string());
        Row::new(vec![
            Span::styled(glyph, glyph_style),
            Span::raw(truncate_string(&display_well_id(record), 18)),
            Span::raw(truncate_string(&record.uwi, 20)),
            Span::raw(format_timestamp(record.install_date)),
            Span::raw(format_timestamp(record.retrieval_date)),
            Span::styled(elapsed, Style::default().fg(Color::Blue)),
            Span::styled(
                format_cost(app.record_cost(record, now)),
                Style::default().fg(Color::Green),
            ),
        ])
    });

    let title = if app.search_term.is_empty() {
        format!(" Plugs ({}) ", app.records.len())
    } else {
        format!(" Plugs ({}/{}) ", visible.len(), app.records.len())
    };

    let table = Table::new(
        rows,
        vec![
            Constraint::Length(2),
            Constraint::Length(18),
            Constraint::Length(20),
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Min(18),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    )
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("│");

    let mut state = table_state(app.selected_record);
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_empty_state(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let lines = if app.records.is_empty() && app.view_mode == ViewMode::Admin {
        vec![
            Line::from(""),
            Line::styled(
                "  No plugs tracked  ",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
            Line::from(""),
            Line::from(vec![
                Span::raw("  Press "),
                Span::styled(
                    " a ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to add a plug record"),
            ]),
        ]
    } else if app.records.is_empty() {
        vec![
            Line::from(""),
            Line::styled(
                "  No plugs tracked  ",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]
    } else {
        vec![
            Line::from(""),
            Line::styled(
                format!("  No plugs match \"{}\"  ", app.search_term),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]
    };

    let empty = Paragraph::new(lines).block(
        Block::default()
            .title(" Plugs ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(empty, area);
}
