pub mod plug;
pub mod settings;
