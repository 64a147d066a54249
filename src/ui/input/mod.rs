mod confirm;
mod help;
mod normal;
mod prompt;
mod search;

pub(super) use confirm::handle_confirm_delete_key;
pub(super) use help::handle_help_key;
pub(super) use normal::handle_normal_key;
pub(super) use prompt::handle_prompt_key;
pub(super) use search::handle_search_key;
