//! Configuration: activity log location and per-task command overrides.
//!
//! Loaded from `--config <PATH>` when given, otherwise from
//! `$XDG_CONFIG_HOME/linux2intune/config.toml` if that file exists. A missing
//! default file is not an error; built-in settings apply.

mod error;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::command::{TaskCatalog, TaskPlan};
use crate::model::Task;
use crate::storage::{ActivityLog, DEFAULT_LOG_FILE};

pub use error::ConfigError;

/// On-disk shape; task keys are validated when converting to [`Config`].
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    log_file: PathBuf,
    tasks: BTreeMap<String, TaskPlan>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            tasks: BTreeMap::new(),
        }
    }
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Activity log file.
    pub log_file: PathBuf,
    /// Plans that replace the built-in ones.
    pub tasks: BTreeMap<Task, TaskPlan>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            tasks: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads the config from `explicit`, or from the default location.
    ///
    /// An explicit path must exist. The default path is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    debug!("no config file found, using built-in settings");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Reads and parses the config file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, path)?;
        debug!(path = %path.display(), overrides = config.tasks.len(), "loaded config");
        Ok(config)
    }

    /// Parses TOML config text; `path` is used only for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let tasks = raw
            .tasks
            .into_iter()
            .map(|(key, plan)| key.parse::<Task>().map(|task| (task, plan)))
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map_err(|source| ConfigError::Task {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            log_file: raw.log_file,
            tasks,
        })
    }

    /// The built-in catalog with this config's overrides applied.
    pub fn catalog(&self) -> TaskCatalog {
        TaskCatalog::builtin().with_overrides(self.tasks.clone())
    }

    /// The activity log this config points at.
    pub fn activity_log(&self) -> ActivityLog {
        ActivityLog::new(&self.log_file)
    }
}

/// `$XDG_CONFIG_HOME/linux2intune/config.toml`, if a config dir exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("linux2intune").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn parse(content: &str) -> Result<Config, ConfigError> {
        Config::parse(content, Path::new("config.toml"))
    }

    mod parsing {
        use super::*;

        #[test]
        fn empty_file_is_default() {
            assert_eq!(parse("").unwrap(), Config::default());
        }

        #[test]
        fn log_file_override() {
            let config = parse(r#"log_file = "/tmp/l2i.log""#).unwrap();
            assert_eq!(config.log_file, PathBuf::from("/tmp/l2i.log"));
            assert!(config.tasks.is_empty());
        }

        #[test]
        fn task_tables() {
            let config = parse(
                r#"
                [tasks.intune-onboarding]
                steps = [["apt", "install", "curl", "gpg", "-y"], ["apt", "install", "intune-portal", "-y"]]

                [tasks.defender-offboarding]
                requires = "mdatp"
                steps = [["mdatp", "health"]]
                "#,
            )
            .unwrap();
            assert_eq!(config.tasks.len(), 2);
            assert_eq!(config.tasks[&Task::IntuneOnboarding].steps.len(), 2);
            assert_eq!(
                config.tasks[&Task::DefenderOffboarding].requires.as_deref(),
                Some("mdatp")
            );
        }

        #[test]
        fn unknown_task_is_rejected() {
            let err = parse("[tasks.reboot]\nsteps = [[\"reboot\"]]").unwrap_err();
            assert!(matches!(err, ConfigError::Task { .. }), "got {err:?}");
            assert!(err.to_string().contains("reboot"));
        }

        #[test]
        fn unknown_top_level_key_is_rejected() {
            let err = parse("theme = \"dark\"").unwrap_err();
            assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
        }

        #[test]
        fn empty_command_is_rejected() {
            let err = parse("[tasks.system-info]\nsteps = [[]]").unwrap_err();
            assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
        }

        #[test]
        fn error_names_the_file() {
            let err = parse("log_file = 3").unwrap_err();
            assert!(err.to_string().contains("config.toml"));
        }
    }

    mod loading {
        use super::*;

        #[test]
        fn explicit_file_is_read() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("config.toml");
            fs::write(&path, r#"log_file = "/tmp/elsewhere.log""#).unwrap();

            let config = Config::load(Some(&path)).unwrap();
            assert_eq!(config.log_file, PathBuf::from("/tmp/elsewhere.log"));
        }

        #[test]
        fn missing_explicit_file_is_an_error() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("absent.toml");
            let err = Config::load(Some(&path)).unwrap_err();
            assert!(matches!(err, ConfigError::Read { .. }), "got {err:?}");
        }

        #[test]
        fn default_path_is_under_config_dir() {
            if let Some(path) = default_config_path() {
                assert!(path.ends_with("linux2intune/config.toml"));
            }
        }
    }

    mod derived {
        use super::*;

        #[test]
        fn catalog_applies_overrides() {
            let config = parse("[tasks.defender-onboarding]\nsteps = [[\"true\"]]").unwrap();
            let catalog = config.catalog();
            assert_eq!(
                catalog.plan(Task::DefenderOnboarding).unwrap().steps[0].program(),
                "true"
            );
            assert_eq!(
                catalog.plan(Task::SystemInfo),
                TaskCatalog::builtin().plan(Task::SystemInfo)
            );
        }

        #[test]
        fn activity_log_uses_log_file() {
            let config = parse(r#"log_file = "/tmp/x.log""#).unwrap();
            assert_eq!(config.activity_log().path(), Path::new("/tmp/x.log"));
        }
    }
}
