//! Operator activity log: a plain text file appended to as tasks run.

mod activity_log;
mod error;

pub use activity_log::{ActivityLog, DEFAULT_LOG_FILE, format_entry};
pub use error::StorageError;
