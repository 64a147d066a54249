mod format;
mod header;
mod overlays;
mod records;

pub(super) use header::{draw_footer, draw_header};
pub(super) use overlays::{draw_confirm_delete_popup, draw_help_popup, draw_terminal_too_small};
pub(super) use records::draw_main;
