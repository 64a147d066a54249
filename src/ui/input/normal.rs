use crate::app::{AppState, SortField, ViewMode};
use crate::data_model::plug::PlugField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::state::InputMode;

pub(in crate::ui) fn handle_normal_key(
    key: KeyEvent,
    app: &mut AppState,
    input_mode: &mut InputMode,
    input_buffer: &mut String,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => {
            *input_mode = InputMode::Help;
        }
        KeyCode::Char('t') => app.toggle_view(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        _ => match app.view_mode {
            ViewMode::Admin => handle_admin_key(key, app, input_mode, input_buffer),
            ViewMode::Customer => handle_customer_key(key, app, input_mode),
        },
    }
    false
}

fn handle_admin_key(
    key: KeyEvent,
    app: &mut AppState,
    input_mode: &mut InputMode,
    input_buffer: &mut String,
) {
    match key.code {
        KeyCode::Char('a') => {
            app.add_record();
        }
        KeyCode::Char('d') => {
            if app.selected_plug().is_some() {
                *input_mode = InputMode::ConfirmDelete;
            }
        }
        KeyCode::Char('n') => {
            input_buffer.clear();
            input_buffer.push_str(&app.global.company_name);
            *input_mode = InputMode::Company;
        }
        KeyCode::Char('w') => start_field_edit(PlugField::WellId, app, input_mode, input_buffer),
        KeyCode::Char('u') => start_field_edit(PlugField::Uwi, app, input_mode, input_buffer),
        KeyCode::Char('i') => {
            start_field_edit(PlugField::InstallDate, app, input_mode, input_buffer)
        }
        KeyCode::Char('r') => {
            start_field_edit(PlugField::RetrievalDate, app, input_mode, input_buffer)
        }
        _ => {}
    }
}

fn handle_customer_key(key: KeyEvent, app: &mut AppState, input_mode: &mut InputMode) {
    match key.code {
        KeyCode::Char('/') => {
            *input_mode = InputMode::Search;
        }
        KeyCode::Char('s') => app.toggle_sort(SortField::WellId),
        KeyCode::Char('o') => app.toggle_sort(SortField::InstallDate),
        _ => {}
    }
}

/// Prompts seed from the current field value so an edit starts from what is
/// already there. No-op when nothing is selected, and the retrieval date
/// cannot be entered before an install date exists.
fn start_field_edit(
    field: PlugField,
    app: &AppState,
    input_mode: &mut InputMode,
    input_buffer: &mut String,
) {
    let Some(record) = app.selected_plug() else {
        return;
    };
    if field == PlugField::RetrievalDate && record.install_date.is_none() {
        return;
    }
    input_buffer.clear();
    input_buffer.push_str(&record.field_text(field));
    *input_mode = InputMode::EditField(field);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalConfig;
    use chrono::NaiveDate;

    fn press(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
    }

    #[test]
    fn retrieval_edit_requires_an_install_date() {
        let mut app = AppState::new(GlobalConfig::default());
        app.add_record();
        let mut mode = InputMode::Normal;
        let mut buffer = String::new();

        handle_normal_key(press('r'), &mut app, &mut mode, &mut buffer);
        assert_eq!(mode, InputMode::Normal);

        app.records[0].install_date = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(8, 30, 0);
        handle_normal_key(press('r'), &mut app, &mut mode, &mut buffer);
        assert_eq!(mode, InputMode::EditField(PlugField::RetrievalDate));
    }

    #[test]
    fn install_edit_needs_no_prior_dates() {
        let mut app = AppState::new(GlobalConfig::default());
        app.add_record();
        let mut mode = InputMode::Normal;
        let mut buffer = String::new();

        handle_normal_key(press('i'), &mut app, &mut mode, &mut buffer);
        assert_eq!(mode, InputMode::EditField(PlugField::InstallDate));
    }
}
