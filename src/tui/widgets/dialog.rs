//! Modal dialog drawn over the current screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::action::{Action, ScreenState};

/// What a dialog is reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// A command failed; the body is its stderr.
    Error,
    /// A command succeeded; the body is its stdout.
    Output,
}

/// A blocking message box. While open it receives every key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    kind: DialogKind,
    title: String,
    body: String,
    scroll: u16,
}

impl Dialog {
    /// An error dialog titled "Error" carrying raw error text.
    pub fn error(body: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: "Error".to_string(),
            body: body.into(),
            scroll: 0,
        }
    }

    /// A dialog presenting command output.
    pub fn output(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Output,
            title: title.into(),
            body: body.into(),
            scroll: 0,
        }
    }

    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Largest scroll offset that still shows the last body line.
    fn max_scroll(&self) -> u16 {
        let lines = self.body.lines().count().saturating_sub(1);
        u16::try_from(lines).unwrap_or(u16::MAX)
    }
}

impl ScreenState for Dialog {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
                Action::None
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => Action::DismissDialog,
            _ => Action::None,
        }
    }
}

/// Returns a rectangle of the given percentage size centered in `area`.
fn centered(area: Rect, width_pct: u16, height_pct: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(height_pct)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(width_pct)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Renders the dialog centered over `area`, clearing what is beneath it.
#[mutants::skip]
pub fn draw_dialog(dialog: &Dialog, frame: &mut Frame, area: Rect) {
    let (width, height, color) = match dialog.kind() {
        DialogKind::Error => (60, 40, Color::Red),
        DialogKind::Output => (90, 80, Color::Cyan),
    };
    let popup = centered(area, width, height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", dialog.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let body = Paragraph::new(dialog.body())
        .wrap(Wrap { trim: false })
        .scroll((dialog.scroll(), 0));
    frame.render_widget(body, body_area);

    let footer =
        Paragraph::new("Enter: close  ↑/↓: scroll").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    mod keys {
        use super::*;

        #[test]
        fn dismiss_keys() {
            for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char('q')] {
                let mut dialog = Dialog::error("boom");
                assert_eq!(dialog.handle_key(press(code)), Action::DismissDialog);
            }
        }

        #[test]
        fn scroll_down_and_up() {
            let mut dialog = Dialog::output("Show System Information", "a\nb\nc");
            dialog.handle_key(press(KeyCode::Down));
            dialog.handle_key(press(KeyCode::Down));
            assert_eq!(dialog.scroll(), 2);
            dialog.handle_key(press(KeyCode::Up));
            assert_eq!(dialog.scroll(), 1);
        }

        #[test]
        fn scroll_stops_at_last_line() {
            let mut dialog = Dialog::output("Show System Information", "a\nb\nc");
            for _ in 0..10 {
                dialog.handle_key(press(KeyCode::Down));
            }
            assert_eq!(dialog.scroll(), 2);
            dialog.handle_key(press(KeyCode::Up));
            assert_eq!(dialog.scroll(), 1);
        }

        #[test]
        fn single_line_body_does_not_scroll() {
            let mut dialog = Dialog::error("boom");
            dialog.handle_key(press(KeyCode::Down));
            assert_eq!(dialog.scroll(), 0);
        }

        #[test]
        fn scroll_up_at_top_is_noop() {
            let mut dialog = Dialog::error("boom");
            assert_eq!(dialog.handle_key(press(KeyCode::Up)), Action::None);
            assert_eq!(dialog.scroll(), 0);
        }

        #[test]
        fn other_keys_do_nothing() {
            let mut dialog = Dialog::error("boom");
            assert_eq!(dialog.handle_key(press(KeyCode::Char('x'))), Action::None);
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn error_dialog() {
            let dialog = Dialog::error("E: Unable to locate package");
            assert_eq!(dialog.kind(), DialogKind::Error);
            assert_eq!(dialog.title(), "Error");
            assert_eq!(dialog.body(), "E: Unable to locate package");
        }

        #[test]
        fn output_dialog() {
            let dialog = Dialog::output("Show System Information", "Linux host");
            assert_eq!(dialog.kind(), DialogKind::Output);
            assert_eq!(dialog.title(), "Show System Information");
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_dialog(dialog: &Dialog, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_dialog(dialog, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_error_title_and_body() {
            let output = render_dialog(&Dialog::error("permission denied"), 80, 20);
            assert!(output.contains("Error"));
            assert!(output.contains("permission denied"));
            assert!(output.contains("Enter: close"));
        }

        #[test]
        fn renders_empty_error_body() {
            let output = render_dialog(&Dialog::error(""), 80, 20);
            assert!(output.contains("Error"));
        }

        #[test]
        fn scrolled_output_hides_first_line() {
            let mut dialog = Dialog::output("Info", "first line\nsecond line");
            dialog.handle_key(press(KeyCode::Down));
            let output = render_dialog(&dialog, 80, 20);
            assert!(!output.contains("first line"));
            assert!(output.contains("second line"));
        }
    }
}
