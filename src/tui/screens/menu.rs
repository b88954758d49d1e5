//! Menu screen: a label, a fixed option list, and submit on Enter.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Menu, MenuOption, Transition};
use crate::tui::action::{Action, ScreenState};

/// State for one menu screen.
///
/// Built fresh every time a menu is shown; nothing carries over between
/// menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    menu: Menu,
    /// Index into `menu.options()`, or `None` until the user picks one.
    selected: Option<usize>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(Menu::Main)
    }
}

impl MenuState {
    /// Creates a screen for `menu` with nothing selected.
    pub fn new(menu: Menu) -> Self {
        Self {
            menu,
            selected: None,
        }
    }

    /// Returns the menu this screen shows.
    pub fn menu(&self) -> Menu {
        self.menu
    }

    /// Returns the option list.
    pub fn options(&self) -> &'static [MenuOption] {
        self.menu.options()
    }

    /// Returns the selected index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the selected option, if any.
    pub fn selected_option(&self) -> Option<MenuOption> {
        self.selected.and_then(|i| self.options().get(i).copied())
    }

    /// Maps the selected option through the transition table.
    ///
    /// No selection means no action.
    fn submit(&self) -> Action {
        let Some(option) = self.selected_option() else {
            return Action::None;
        };
        match self.menu.transition(option) {
            Some(Transition::Open(menu)) => Action::Open(menu),
            Some(Transition::Run(task)) => Action::RunTask(task),
            Some(Transition::BackToMain) => Action::BackToMain,
            None => Action::None,
        }
    }

    /// Moves the selection up by one (no wrap). Selects the first option if
    /// nothing is selected.
    fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) => Some(i.saturating_sub(1)),
            None => Some(0),
        };
    }

    /// Moves the selection down by one (no wrap). Selects the first option if
    /// nothing is selected.
    fn select_next(&mut self) {
        let last = self.options().len().saturating_sub(1);
        self.selected = match self.selected {
            Some(i) => Some((i + 1).min(last)),
            None => Some(0),
        };
    }

    /// Esc and `q` close the main menu, and leave a submenu.
    fn leave(&self) -> Action {
        match self.menu {
            Menu::Main => Action::Quit,
            _ => Action::BackToMain,
        }
    }
}

impl ScreenState for MenuState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.select_prev();
                Action::None
            }
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char('q') | KeyCode::Esc => self.leave(),
            _ => Action::None,
        }
    }
}

/// Renders the menu screen.
#[mutants::skip]
pub fn draw_menu(state: &MenuState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", state.menu().title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [label_area, options_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let label = Paragraph::new("Select an option:")
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(label, label_area);

    let lines: Vec<Line> = state
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            if state.selected() == Some(i) {
                Line::from(Span::styled(
                    format!("> {}", option.label()),
                    Style::default().fg(Color::Black).bg(Color::Yellow),
                ))
            } else {
                Line::from(format!("  {}", option.label()))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), options_area);

    let back = match state.menu() {
        Menu::Main => "q: quit",
        _ => "Esc: main menu",
    };
    let footer = Paragraph::new(format!("↑/↓: select  Enter: submit  {back}"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
