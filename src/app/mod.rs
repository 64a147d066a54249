mod parsing;
mod state;

pub use parsing::{format_date_input, parse_date_input};
pub use state::{AppState, SortDirection, SortField, ViewMode};
