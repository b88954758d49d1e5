use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use super::error::StorageError;

/// Where the activity log lives unless configured otherwise.
pub const DEFAULT_LOG_FILE: &str = "/var/log/linux2intune.log";

/// Append-only operator log, one `<timestamp>: <message>` line per entry.
///
/// The file is opened for each entry and never rotated or locked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    path: PathBuf,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl ActivityLog {
    /// Creates a log writing to `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `message` stamped with the current local time.
    pub fn append(&self, message: &str) -> Result<(), StorageError> {
        self.append_at(Local::now().naive_local(), message)
    }

    fn append_at(&self, at: NaiveDateTime, message: &str) -> Result<(), StorageError> {
        let write = || -> std::io::Result<()> {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            writeln!(file, "{}", format_entry(at, message))
        };
        write().map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Formats one log line, without the trailing newline.
pub fn format_entry(at: NaiveDateTime, message: &str) -> String {
    format!("{}: {message}", at.format("%Y-%m-%d %H:%M:%S%.6f"))
}
