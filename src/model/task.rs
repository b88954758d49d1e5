use std::fmt;
use std::str::FromStr;

/// A runnable menu action.
///
/// Each task resolves to a [`TaskPlan`](crate::command::TaskPlan) through the
/// [`TaskCatalog`](crate::command::TaskCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Task {
    IntuneOnboarding,
    IntuneOffboarding,
    IntuneUpdateApp,
    DefenderOnboarding,
    DefenderOffboarding,
    DefenderUpdateApp,
    UpdatePackageLists,
    UpgradePackages,
    RemoveUnusedPackages,
    SystemInfo,
}

static ALL_TASKS: &[Task] = &[
    Task::IntuneOnboarding,
    Task::IntuneOffboarding,
    Task::IntuneUpdateApp,
    Task::DefenderOnboarding,
    Task::DefenderOffboarding,
    Task::DefenderUpdateApp,
    Task::UpdatePackageLists,
    Task::UpgradePackages,
    Task::RemoveUnusedPackages,
    Task::SystemInfo,
];

impl Task {
    /// Returns every task in menu order.
    pub fn all() -> &'static [Task] {
        ALL_TASKS
    }

    /// Human-readable label, matching the menu option that triggers the task.
    pub fn label(self) -> &'static str {
        match self {
            Task::IntuneOnboarding => "Intune - Onboarding",
            Task::IntuneOffboarding => "Intune - Offboarding",
            Task::IntuneUpdateApp => "Intune - Update App",
            Task::DefenderOnboarding => "Defender - Onboarding",
            Task::DefenderOffboarding => "Defender - Offboarding",
            Task::DefenderUpdateApp => "Defender - Update App",
            Task::UpdatePackageLists => "Update Package Lists",
            Task::UpgradePackages => "Upgrade Installed Packages",
            Task::RemoveUnusedPackages => "Remove Unused Packages",
            Task::SystemInfo => "Show System Information",
        }
    }

    /// Config file key, as used in `[tasks.<key>]`.
    pub fn key(self) -> &'static str {
        match self {
            Task::IntuneOnboarding => "intune-onboarding",
            Task::IntuneOffboarding => "intune-offboarding",
            Task::IntuneUpdateApp => "intune-update-app",
            Task::DefenderOnboarding => "defender-onboarding",
            Task::DefenderOffboarding => "defender-offboarding",
            Task::DefenderUpdateApp => "defender-update-app",
            Task::UpdatePackageLists => "update-package-lists",
            Task::UpgradePackages => "upgrade-packages",
            Task::RemoveUnusedPackages => "remove-unused-packages",
            Task::SystemInfo => "system-info",
        }
    }

    /// Whether a successful run should present its output to the user.
    ///
    /// Other tasks only report completion.
    pub fn shows_output(self) -> bool {
        matches!(self, Task::SystemInfo)
    }
}

/// A config key that names no [`Task`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task: {0}")]
pub struct UnknownTask(pub String);

impl FromStr for Task {
    type Err = UnknownTask;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Task::all()
            .iter()
            .copied()
            .find(|task| task.key() == s)
            .ok_or_else(|| UnknownTask(s.to_string()))
    }
}

#[mutants::skip]
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn all_returns_every_task_once() {
        let unique: HashSet<_> = Task::all().iter().collect();
        assert_eq!(Task::all().len(), 10);
        assert_eq!(unique.len(), Task::all().len());
    }

    #[test]
    fn labels_are_unique() {
        let labels: HashSet<_> = Task::all().iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), Task::all().len());
    }

    #[test]
    fn only_system_info_shows_output() {
        for task in Task::all() {
            assert_eq!(
                task.shows_output(),
                *task == Task::SystemInfo,
                "{task:?} shows_output mismatch"
            );
        }
    }

    #[test]
    fn keys_parse_back() {
        for task in Task::all() {
            assert_eq!(task.key().parse::<Task>(), Ok(*task));
        }
    }

    #[test]
    fn parse_known_keys() {
        assert_eq!("intune-onboarding".parse::<Task>(), Ok(Task::IntuneOnboarding));
        assert_eq!("system-info".parse::<Task>(), Ok(Task::SystemInfo));
    }

    #[test]
    fn parse_rejects_unknown_key() {
        assert_eq!(
            "reboot".parse::<Task>(),
            Err(UnknownTask("reboot".to_string()))
        );
    }

    #[test]
    fn parse_rejects_label() {
        assert!("Intune - Onboarding".parse::<Task>().is_err());
    }
}
