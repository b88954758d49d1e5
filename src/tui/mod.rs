//! TUI: the menu screen, modal dialogs, status bar and the blocking event loop.

pub mod action;
pub mod app;
pub mod error;
pub mod screens;
pub mod widgets;

pub use app::App;
pub use error::AppError;
