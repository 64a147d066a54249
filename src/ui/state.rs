use crate::data_model::plug::PlugField;

/// Minimum terminal width required (columns)
pub(super) const MIN_TERMINAL_WIDTH: u16 = 80;
/// Minimum terminal height required (rows)
pub(super) const MIN_TERMINAL_HEIGHT: u16 = 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum InputMode {
    Normal,
    EditField(PlugField),
    Company,
    Search,
    ConfirmDelete,
    Help,
}

impl InputMode {
    /// Modes that own the bottom input bar and its text buffer. Search is
    /// not among them: it edits the filter live and renders inline.
    pub(super) fn uses_input_bar(self) -> bool {
        matches!(self, InputMode::EditField(_) | InputMode::Company)
    }

    pub(super) fn prompt(self) -> &'static str {
        match self {
            InputMode::EditField(PlugField::WellId) => " Well ID: ",
            InputMode::EditField(PlugField::Uwi) => " UWI: ",
            InputMode::EditField(PlugField::InstallDate) => {
                " Install Date (YYYY-MM-DDTHH:MM, blank clears): "
            }
            InputMode::EditField(PlugField::RetrievalDate) => {
                " Retrieval Date (YYYY-MM-DDTHH:MM, blank clears): "
            }
            InputMode::Company => " Company Name: ",
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_prompt_modes_use_the_input_bar() {
        assert!(InputMode::Company.uses_input_bar());
        assert!(InputMode::EditField(PlugField::InstallDate).uses_input_bar());
        assert!(!InputMode::Search.uses_input_bar());
        assert!(!InputMode::Normal.uses_input_bar());
        assert!(!InputMode::ConfirmDelete.uses_input_bar());
    }
}
