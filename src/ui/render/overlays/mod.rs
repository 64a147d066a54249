mod confirm;
mod help;
mod terminal;

pub(in crate::ui) use confirm::draw_confirm_delete_popup;
pub(in crate::ui) use help::draw_help_popup;
pub(in crate::ui) use terminal::draw_terminal_too_small;
