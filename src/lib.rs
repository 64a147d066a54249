mod common;

pub mod app;
pub mod billing;
pub mod config;
pub mod data_model;
pub mod settings;
pub mod storage;
pub mod ui;
