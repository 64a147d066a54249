use crate::app::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::state::InputMode;

/// Search edits the filter live: every keystroke narrows the visible list
/// immediately, and the term survives leaving the mode.
pub(in crate::ui) fn handle_search_key(
    key: KeyEvent,
    app: &mut AppState,
    input_mode: &mut InputMode,
) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            *input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            let mut term = app.search_term.clone();
            term.pop();
            app.set_search(term);
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            let mut term = app.search_term.clone();
            term.push(ch);
            app.set_search(term);
        }
        _ => {}
    }
}
