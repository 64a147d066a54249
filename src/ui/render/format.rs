use crate::data_model::plug::PlugRecord;
use chrono::NaiveDateTime;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub(super) fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

pub(super) fn format_cost(amount: f64) -> String {
    format!("${amount:.2}")
}

pub(super) fn format_timestamp(ts: Option<NaiveDateTime>) -> String {
    ts.map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// Status glyph for the record list and detail title: installed plugs are
/// running timers, retrieved plugs are frozen, empty records have no dates.
pub(super) fn record_status(record: &PlugRecord) -> (&'static str, Style) {
    match (record.install_date, record.retrieval_date) {
        (Some(_), Some(_)) => ("⏹", Style::default().fg(Color::Yellow)),
        (Some(_), None) => ("▶", Style::default().fg(Color::Green)),
        _ => ("○", Style::default().fg(Color::DarkGray)),
    }
}

pub(super) fn display_well_id(record: &PlugRecord) -> String {
    if record.well_id.is_empty() {
        "(unnamed)".to_string()
    } else {
        record.well_id.clone()
    }
}

pub(super) fn table_state(selected: usize) -> ratatui::widgets::TableState {
    let mut state = ratatui::widgets::TableState::default();
    state.select(Some(selected));
    state
}
