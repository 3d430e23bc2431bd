// Terminal front-end for the dashboard, drawn with ratatui

pub mod app;
pub mod runner;
pub mod ui;

pub use app::{Action, App, LinkTarget};
pub use runner::run_tui;
