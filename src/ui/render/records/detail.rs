use crate::app::{AppState, ViewMode};
use chrono::NaiveDateTime;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::format::{
    display_well_id, format_cost, format_timestamp, record_status, truncate_string,
};

/// Detail strip for the selected record: full field values plus the large
/// timer and the cost breakdown at the configured rates.
pub(super) fn draw_record_detail(
    frame: &mut ratatui::Frame,
    area: Rect,
    app: &AppState,
    now: NaiveDateTime,
) {
    let Some(record) = app.selected_plug() else {
        let placeholder = Paragraph::new(Line::styled(
            "  Nothing selected",
            Style::default().fg(Color::DarkGray),
        ))
        .block(
            Block::default()
                .title(" Selected ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(placeholder, area);
        return;
    };

    let (glyph, glyph_style) = record_status(record);
    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(glyph, glyph_style),
        Span::raw(" "),
        Span::styled(
            truncate_string(&display_well_id(record), 40),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" "),
    ]);

    let admin = app.view_mode == ViewMode::Admin;
    let timer_line = match app.record_elapsed(record, now) {
        Some(elapsed) => Line::from(vec![
            Span::styled("  ⏱ ", Style::default().fg(Color::Blue)),
            Span::styled(
                elapsed.to_string(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            if record.retrieval_date.is_some() {
                Span::styled("  (retrieved)", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw("")
            },
        ]),
        None => Line::styled("  not installed", Style::default().fg(Color::DarkGray)),
    };

    let rates = &app.global.rates;
    let cost_line = Line::from(vec![
        Span::styled(
            format!("  {}", format_cost(app.record_cost(record, now))),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  ({:.2}/day, {:.2}/day after {} days)",
                rates.regular_per_day, rates.discounted_per_day, rates.discount_after_days
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let mut lines = vec![
        field_line("Well ID", &display_well_id(record), "[w]", admin),
        field_line("UWI", &value_or_dash(&record.uwi), "[u]", admin),
        field_line(
            "Install Date",
            &format_timestamp(record.install_date),
            "[i]",
            admin,
        ),
        // The retrieval edit is disabled until an install date exists.
        field_line(
            "Retrieval Date",
            &format_timestamp(record.retrieval_date),
            "[r]",
            admin && record.install_date.is_some(),
        ),
    ];
    lines.push(timer_line);
    lines.push(cost_line);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(label: &str, value: &str, hint: &'static str, admin: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("  {label:<16}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ];
    if admin {
        spans.push(Span::styled(
            format!("  {hint}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn value_or_dash(value: &str) -> String {
    if value.is_empty() {
        "—".to_string()
    } else {
        value.to_string()
    }
}
