pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod persistence;
pub mod rendering;
pub mod state;
pub mod ui;
