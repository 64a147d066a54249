mod detail;
mod table;

use crate::app::AppState;
use chrono::NaiveDateTime;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use detail::draw_record_detail;
use table::draw_record_table;

pub(in crate::ui) fn draw_main(
    frame: &mut ratatui::Frame,
    area: Rect,
    app: &AppState,
    now: NaiveDateTime,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(8)])
        .split(area);

    draw_record_table(frame, chunks[0], app, now);
    draw_record_detail(frame, chunks[1], app, now);
}
