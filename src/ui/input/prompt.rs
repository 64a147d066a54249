use crate::app::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::state::InputMode;

/// Shared buffer editing for the field and company-name prompts. Enter
/// commits, Esc abandons.
pub(in crate::ui) fn handle_prompt_key(
    key: KeyEvent,
    app: &mut AppState,
    input_mode: &mut InputMode,
    input_buffer: &mut String,
) {
    match key.code {
        KeyCode::Esc => {
            *input_mode = InputMode::Normal;
            input_buffer.clear();
        }
        KeyCode::Enter => {
            match *input_mode {
                InputMode::EditField(field) => {
                    if let Some(index) = app.selected_record_index() {
                        app.set_field(index, field, input_buffer);
                    }
                }
                InputMode::Company => {
                    app.global.company_name = input_buffer.clone();
                }
                InputMode::Normal
                | InputMode::Search
                | InputMode::ConfirmDelete
                | InputMode::Help => {}
            }
            *input_mode = InputMode::Normal;
            input_buffer.clear();
        }
        KeyCode::Backspace => {
            input_buffer.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            input_buffer.push(ch);
        }
        _ => {}
    }
}
