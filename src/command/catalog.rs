use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::info;

use super::error::TaskError;
use super::runner::{CommandLine, CommandRunner, require_installed, run};
use crate::model::Task;

const SYSTEM_INFO_SCRIPT: &str = "uname -a; echo; free -h; echo; df -h; echo; lscpu; echo; ip a";

/// The commands behind one [`Task`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskPlan {
    /// Package that must already be installed, checked with `dpkg -s`.
    pub requires: Option<String>,
    /// Commands run in order; the first failure stops the task.
    pub steps: Vec<CommandLine>,
}

impl TaskPlan {
    fn of(steps: impl IntoIterator<Item = CommandLine>) -> Self {
        Self {
            requires: None,
            steps: steps.into_iter().collect(),
        }
    }

    fn requiring(package: &str) -> Self {
        Self {
            requires: Some(package.to_string()),
            steps: Vec::new(),
        }
    }
}

/// Maps every [`Task`] to its [`TaskPlan`].
///
/// The onboarding, offboarding and app-update sequences for Intune and
/// Defender ship empty apart from their preconditions; operators supply them
/// through the `[tasks.*]` tables of the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCatalog {
    plans: BTreeMap<Task, TaskPlan>,
}

impl Default for TaskCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TaskCatalog {
    /// The catalog used when nothing is configured.
    pub fn builtin() -> Self {
        let apt = || CommandLine::new("apt");
        let plans = BTreeMap::from([
            (
                Task::IntuneOnboarding,
                TaskPlan::of([apt().args(["install", "curl", "gpg", "-y"])]),
            ),
            (Task::IntuneOffboarding, TaskPlan::requiring("intune-portal")),
            (Task::IntuneUpdateApp, TaskPlan::requiring("intune-portal")),
            (Task::DefenderOnboarding, TaskPlan::default()),
            (Task::DefenderOffboarding, TaskPlan::requiring("mdatp")),
            (Task::DefenderUpdateApp, TaskPlan::requiring("mdatp")),
            (Task::UpdatePackageLists, TaskPlan::of([apt().arg("update")])),
            (
                Task::UpgradePackages,
                TaskPlan::of([apt().args(["upgrade", "-y"])]),
            ),
            (
                Task::RemoveUnusedPackages,
                TaskPlan::of([apt().args(["autoremove", "-y"])]),
            ),
            (
                Task::SystemInfo,
                TaskPlan::of([CommandLine::new("/bin/sh").args(["-c", SYSTEM_INFO_SCRIPT])]),
            ),
        ]);
        Self { plans }
    }

    /// Applies configured plans, task by task.
    ///
    /// Steps replace the existing steps. An override without `requires`
    /// keeps the existing precondition.
    pub fn with_overrides(mut self, overrides: BTreeMap<Task, TaskPlan>) -> Self {
        for (task, plan) in overrides {
            let merged = match self.plans.remove(&task) {
                Some(existing) => TaskPlan {
                    requires: plan.requires.or(existing.requires),
                    steps: plan.steps,
                },
                None => plan,
            };
            self.plans.insert(task, merged);
        }
        self
    }

    /// Returns the plan for `task`, if any.
    pub fn plan(&self, task: Task) -> Option<&TaskPlan> {
        self.plans.get(&task)
    }

    /// Runs `task` to completion.
    ///
    /// Checks the plan's required package first, even when no steps are
    /// configured, then runs each step in order. Returns the non-empty
    /// outputs of all steps joined by newlines.
    pub fn run(&self, runner: &dyn CommandRunner, task: Task) -> Result<String, TaskError> {
        let plan = self.plan(task).ok_or(TaskError::NotConfigured(task))?;

        if let Some(package) = &plan.requires {
            require_installed(runner, package)?;
        }
        if plan.steps.is_empty() {
            return Err(TaskError::NotConfigured(task));
        }

        let mut outputs = Vec::new();
        for (i, step) in plan.steps.iter().enumerate() {
            info!(%task, step = i + 1, of = plan.steps.len(), "running task step");
            let out = run(runner, step)?;
            if !out.is_empty() {
                outputs.push(out);
            }
        }
        Ok(outputs.join("\n"))
    }
}
