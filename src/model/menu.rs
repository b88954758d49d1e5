use std::fmt;

use super::task::Task;

/// All menus the navigator can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Menu {
    #[default]
    Main,
    Intune,
    Defender,
    Update,
}

/// A selectable entry in a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    MicrosoftIntune,
    DefenderForEndpoint,
    UpdateAndUpgradeSystem,
    ShowSystemInformation,
    IntuneOnboarding,
    IntuneOffboarding,
    IntuneUpdateApp,
    DefenderOnboarding,
    DefenderOffboarding,
    DefenderUpdateApp,
    UpdatePackageLists,
    UpgradePackages,
    RemoveUnusedPackages,
    BackToMainMenu,
}

/// What submitting an option does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Replace the current screen with the given submenu.
    Open(Menu),
    /// Run a task; navigation state is left as is.
    Run(Task),
    /// Discard the current screen and rebuild the main menu.
    BackToMain,
}

static MAIN_OPTIONS: &[MenuOption] = &[
    MenuOption::MicrosoftIntune,
    MenuOption::DefenderForEndpoint,
    MenuOption::UpdateAndUpgradeSystem,
    MenuOption::ShowSystemInformation,
];

static INTUNE_OPTIONS: &[MenuOption] = &[
    MenuOption::IntuneOnboarding,
    MenuOption::IntuneOffboarding,
    MenuOption::IntuneUpdateApp,
    MenuOption::BackToMainMenu,
];

static DEFENDER_OPTIONS: &[MenuOption] = &[
    MenuOption::DefenderOnboarding,
    MenuOption::DefenderOffboarding,
    MenuOption::DefenderUpdateApp,
    MenuOption::BackToMainMenu,
];

static UPDATE_OPTIONS: &[MenuOption] = &[
    MenuOption::UpdatePackageLists,
    MenuOption::UpgradePackages,
    MenuOption::RemoveUnusedPackages,
    MenuOption::BackToMainMenu,
];

impl Menu {
    /// Window title for this menu.
    pub fn title(self) -> &'static str {
        match self {
            Menu::Main => "Linux2Intune",
            Menu::Intune => "Microsoft Intune",
            Menu::Defender => "Defender for Endpoint",
            Menu::Update => "Update and Upgrade System",
        }
    }

    /// The fixed option list, in display order.
    pub fn options(self) -> &'static [MenuOption] {
        match self {
            Menu::Main => MAIN_OPTIONS,
            Menu::Intune => INTUNE_OPTIONS,
            Menu::Defender => DEFENDER_OPTIONS,
            Menu::Update => UPDATE_OPTIONS,
        }
    }

    /// Looks up what submitting `option` on this menu does.
    ///
    /// Returns `None` when the option does not belong to this menu.
    pub fn transition(self, option: MenuOption) -> Option<Transition> {
        use MenuOption as O;

        let transition = match (self, option) {
            (Menu::Main, O::MicrosoftIntune) => Transition::Open(Menu::Intune),
            (Menu::Main, O::DefenderForEndpoint) => Transition::Open(Menu::Defender),
            (Menu::Main, O::UpdateAndUpgradeSystem) => Transition::Open(Menu::Update),
            (Menu::Main, O::ShowSystemInformation) => Transition::Run(Task::SystemInfo),

            (Menu::Intune, O::IntuneOnboarding) => Transition::Run(Task::IntuneOnboarding),
            (Menu::Intune, O::IntuneOffboarding) => Transition::Run(Task::IntuneOffboarding),
            (Menu::Intune, O::IntuneUpdateApp) => Transition::Run(Task::IntuneUpdateApp),

            (Menu::Defender, O::DefenderOnboarding) => Transition::Run(Task::DefenderOnboarding),
            (Menu::Defender, O::DefenderOffboarding) => Transition::Run(Task::DefenderOffboarding),
            (Menu::Defender, O::DefenderUpdateApp) => Transition::Run(Task::DefenderUpdateApp),

            (Menu::Update, O::UpdatePackageLists) => Transition::Run(Task::UpdatePackageLists),
            (Menu::Update, O::UpgradePackages) => Transition::Run(Task::UpgradePackages),
            (Menu::Update, O::RemoveUnusedPackages) => Transition::Run(Task::RemoveUnusedPackages),

            (Menu::Intune | Menu::Defender | Menu::Update, O::BackToMainMenu) => {
                Transition::BackToMain
            }
            _ => return None,
        };
        Some(transition)
    }
}

impl MenuOption {
    /// Text shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::MicrosoftIntune => "Microsoft Intune",
            MenuOption::DefenderForEndpoint => "Defender for Endpoint",
            MenuOption::UpdateAndUpgradeSystem => "Update and Upgrade System",
            MenuOption::ShowSystemInformation => Task::SystemInfo.label(),
            MenuOption::IntuneOnboarding => Task::IntuneOnboarding.label(),
            MenuOption::IntuneOffboarding => Task::IntuneOffboarding.label(),
            MenuOption::IntuneUpdateApp => Task::IntuneUpdateApp.label(),
            MenuOption::DefenderOnboarding => Task::DefenderOnboarding.label(),
            MenuOption::DefenderOffboarding => Task::DefenderOffboarding.label(),
            MenuOption::DefenderUpdateApp => Task::DefenderUpdateApp.label(),
            MenuOption::UpdatePackageLists => Task::UpdatePackageLists.label(),
            MenuOption::UpgradePackages => Task::UpgradePackages.label(),
            MenuOption::RemoveUnusedPackages => Task::RemoveUnusedPackages.label(),
            MenuOption::BackToMainMenu => "Back to Main Menu",
        }
    }
}

#[mutants::skip]
impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
