//! TUI screen implementations.

pub mod menu;

pub use menu::{MenuState, draw_menu};
