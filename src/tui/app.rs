use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tracing::{info, warn};

use crate::command::{CommandRunner, TaskCatalog};
use crate::model::{Menu, Task};
use crate::storage::ActivityLog;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{MenuState, draw_menu};
use super::widgets::{Dialog, StatusBarContext, StatusMessage, draw_dialog, draw_status_bar};

/// Top-level application state.
///
/// Owns the single visible screen. Dialogs sit on top of it and take every
/// key until dismissed.
pub struct App {
    screen: MenuState,
    dialog: Option<Dialog>,
    status: Option<StatusMessage>,
    pending: Option<Task>,
    catalog: TaskCatalog,
    runner: Box<dyn CommandRunner>,
    activity_log: ActivityLog,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the main menu.
    pub fn new(
        catalog: TaskCatalog,
        runner: Box<dyn CommandRunner>,
        activity_log: ActivityLog,
    ) -> Self {
        Self {
            screen: MenuState::new(Menu::Main),
            dialog: None,
            status: None,
            pending: None,
            catalog,
            runner,
            activity_log,
            should_quit: false,
        }
    }

    /// Main event loop: draw → run pending task or read event → dispatch → check quit.
    ///
    /// A submitted task is drawn as running for one frame, then executed
    /// synchronously; the UI does not respond until it finishes.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if self.pending.is_some() {
                self.run_pending();
                continue;
            }
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let [content_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        draw_menu(&self.screen, frame, content_area);

        let ctx = StatusBarContext {
            menu: self.screen.menu(),
            message: self.status.clone(),
        };
        draw_status_bar(&ctx, frame, status_area);

        if let Some(dialog) = &self.dialog {
            draw_dialog(dialog, frame, area);
        }
    }

    /// Handles a key event: Ctrl+C first, then the open dialog, then the screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let action = match &mut self.dialog {
            Some(dialog) => dialog.handle_key(key),
            None => self.screen.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Open(menu) => {
                info!(?menu, "opening menu");
                self.screen = MenuState::new(menu);
                self.status = None;
            }
            Action::BackToMain => {
                info!("returning to main menu");
                self.screen = MenuState::new(Menu::Main);
                self.status = None;
            }
            Action::RunTask(task) => {
                self.pending = Some(task);
                self.status = Some(StatusMessage::info(format!("Running {task}…")));
            }
            Action::DismissDialog => self.dialog = None,
            Action::Quit => self.should_quit = true,
        }
    }

    /// Runs the task submitted last, if any.
    pub fn run_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            self.run_task(task);
        }
    }

    /// Runs `task` to completion and reports the outcome.
    ///
    /// Failures open an error dialog with the raw error text. Successful
    /// tasks that report output open an output dialog. Start and outcome are
    /// appended to the activity log.
    fn run_task(&mut self, task: Task) {
        let mut log_error = self.record(&format!("{task} started"));

        let status = match self.catalog.run(&*self.runner, task) {
            Ok(output) => {
                info!(%task, "task completed");
                log_error = log_error.or(self.record(&format!("{task} completed")));
                if task.shows_output() {
                    self.dialog = Some(Dialog::output(task.label(), output));
                }
                StatusMessage::info(format!("{task} completed"))
            }
            Err(e) => {
                warn!(%task, error = %e, "task failed");
                let message = e.message();
                log_error = log_error.or(self.record(&format!("{task} failed: {message}")));
                self.dialog = Some(Dialog::error(message));
                StatusMessage::error(format!("{task} failed"))
            }
        };

        self.status = Some(match log_error {
            Some(err) => StatusMessage::error(format!("{}; {err}", status.text)),
            None => status,
        });
    }

    /// Appends to the activity log, returning the failure text if it fails.
    fn record(&self, message: &str) -> Option<String> {
        self.activity_log.append(message).err().map(|e| {
            warn!(error = %e, "activity log write failed");
            e.to_string()
        })
    }

    /// Returns the visible screen.
    pub fn screen(&self) -> &MenuState {
        &self.screen
    }

    /// Returns the open dialog, if any.
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Returns the status bar message, if any.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Returns the task waiting to run, if any.
    pub fn pending(&self) -> Option<Task> {
        self.pending
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
