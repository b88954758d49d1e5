use crate::model::Task;

/// A command exited unsuccessfully or could not be started.
///
/// Covers "command not found", "permission denied" and "ran but failed"
/// alike; the payload is whatever the process (or the OS) reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Non-zero exit status, death by signal, or spawn failure.
    #[error("command failed: {stderr}")]
    Failed {
        /// Trimmed standard error of the process.
        stderr: String,
    },
}

impl CommandError {
    /// Returns the raw error text to show the user.
    pub fn stderr(&self) -> &str {
        match self {
            CommandError::Failed { stderr } => stderr,
        }
    }
}

/// A command line could not be built from its configured form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandLineError {
    /// The argument vector had no program.
    #[error("command line must name a program")]
    Empty,
}

/// Errors from running a [`Task`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// The task has no command steps in the catalog.
    #[error("no commands configured for {0}")]
    NotConfigured(Task),

    /// A precondition check or step failed.
    #[error(transparent)]
    Command(#[from] CommandError),
}

impl TaskError {
    /// Text for the error dialog: raw stderr for command failures.
    pub fn message(&self) -> String {
        match self {
            TaskError::Command(e) => e.stderr().to_string(),
            other => other.to_string(),
        }
    }
}
