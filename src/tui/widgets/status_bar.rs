//! Status bar widget: one-line location and last-outcome display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Menu;

/// A message shown after the location, e.g. the outcome of the last task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// The visible menu.
    pub menu: Menu,
    /// Last status message, if any.
    pub message: Option<StatusMessage>,
}

/// Renders a one-line status bar.
///
/// Display format: `Linux2Intune › Microsoft Intune  <message>`, with the
/// message in Green, or Red for errors. The location is omitted on the main
/// menu.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);

    let mut spans = vec![Span::styled(Menu::Main.title(), cyan)];
    if ctx.menu != Menu::Main {
        spans.push(Span::styled(format!(" › {}", ctx.menu.title()), cyan));
    }

    if let Some(message) = &ctx.message {
        let color = if message.is_error {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message.text.clone(),
            Style::default().fg(color),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
