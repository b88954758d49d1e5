use crate::config::ConfigError;

/// Errors that end the application.
///
/// Activity log write failures are not among them; those are reported in
/// the status bar and the app keeps running.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
