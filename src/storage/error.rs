use std::path::PathBuf;

/// Errors that can occur while writing the activity log.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The log file could not be opened or written.
    #[error("could not write {}: {source}", .path.display())]
    Write {
        /// The log file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
