mod menu;
mod task;

pub use menu::{Menu, MenuOption, Transition};
pub use task::{Task, UnknownTask};
