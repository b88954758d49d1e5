//! Reusable TUI widgets.

pub mod dialog;
pub mod status_bar;

pub use dialog::{Dialog, DialogKind, draw_dialog};
pub use status_bar::{StatusBarContext, StatusMessage, draw_status_bar};
