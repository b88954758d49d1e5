use std::path::PathBuf;

use crate::model::UnknownTask;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape.
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A `[tasks.*]` table names a task that does not exist.
    #[error("invalid config {}: {source}", .path.display())]
    Task {
        path: PathBuf,
        source: UnknownTask,
    },
}
