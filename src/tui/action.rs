//! Actions returned by screen and dialog key handlers.

use crossterm::event::KeyEvent;

use crate::model::{Menu, Task};

/// An action that a key handler returns to the [`App`](super::App).
///
/// The `App` interprets these to change the visible screen or run a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Replace the current screen with the given submenu.
    Open(Menu),
    /// Discard the current screen and rebuild the main menu.
    BackToMain,
    /// Run a task synchronously.
    RunTask(Task),
    /// Close the open dialog.
    DismissDialog,
    /// Quit the application.
    Quit,
}

/// Common behavior for everything that receives key events.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
