//! Display theme and dashboard role. Both are raw strings on the document
//! root and in storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::design::UnknownOption;
use crate::error::Result;
use crate::keys;
use crate::storage::KeyValueStore;
use crate::view_model::ViewModel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon on the toggle button: the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "fa-solid fa-moon",
            Theme::Dark => "fa-solid fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownOption;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Client,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Admin => "admin",
        }
    }

    pub fn toggled(self) -> Role {
        match self {
            Role::Client => Role::Admin,
            Role::Admin => Role::Client,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Client => "Client Mode",
            Role::Admin => "Admin / Designer Mode",
        }
    }

    /// Canned dashboard figures. Not derived from any stored data.
    pub fn stats(self) -> &'static [Stat] {
        match self {
            Role::Client => CLIENT_STATS,
            Role::Admin => ADMIN_STATS,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownOption;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "client" => Ok(Role::Client),
            // the older dashboard script wrote "designer"
            "admin" | "designer" => Ok(Role::Admin),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

const CLIENT_STATS: &[Stat] = &[
    Stat { label: "Active Designs", value: "3" },
    Stat { label: "Messages", value: "5" },
    Stat { label: "Account Balance", value: "$2,450.00" },
    Stat { label: "Pending Approvals", value: "2" },
    Stat { label: "Completed Projects", value: "12" },
    Stat { label: "Total Spent", value: "$18,750" },
];

const ADMIN_STATS: &[Stat] = &[
    Stat { label: "Active Designs", value: "8" },
    Stat { label: "Messages", value: "12" },
    Stat { label: "Earnings", value: "$15,230.00" },
    Stat { label: "Pending Reviews", value: "5" },
    Stat { label: "Completed Projects", value: "47" },
    Stat { label: "Total Earnings", value: "$124,500" },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeView {
    pub theme: Theme,
    /// Value of the `data-theme` attribute.
    pub attribute: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleView {
    pub role: Role,
    /// Value of the `data-role` attribute.
    pub attribute: &'static str,
    pub label: &'static str,
    pub switch_checked: bool,
    pub stats: &'static [Stat],
}

/// Flip the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle;

/// The theme slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeSetting;

impl ThemeSetting {
    /// Load the theme, falling back to the key the older scripts wrote.
    pub fn load_with_legacy<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
        store
            .get(keys::THEME)
            .or_else(|| store.get(keys::LEGACY_THEME))
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }
}

impl ViewModel for ThemeSetting {
    type State = Theme;
    type Action = Toggle;
    type View = ThemeView;

    fn key(&self) -> &'static str {
        keys::THEME
    }

    fn default_state(&self) -> Theme {
        Theme::Dark
    }

    fn decode(&self, raw: &str) -> Option<Theme> {
        raw.parse().ok()
    }

    fn encode(&self, theme: &Theme) -> Result<String> {
        Ok(theme.as_str().to_string())
    }

    fn mutate(&self, theme: Theme, _toggle: Toggle) -> Result<Theme> {
        Ok(theme.toggled())
    }

    fn render(&self, theme: &Theme) -> ThemeView {
        ThemeView {
            theme: *theme,
            attribute: theme.as_str(),
            icon: theme.icon(),
        }
    }
}

/// The role slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleSetting;

impl ViewModel for RoleSetting {
    type State = Role;
    type Action = Toggle;
    type View = RoleView;

    fn key(&self) -> &'static str {
        keys::ROLE
    }

    fn default_state(&self) -> Role {
        Role::Client
    }

    fn decode(&self, raw: &str) -> Option<Role> {
        raw.parse().ok()
    }

    fn encode(&self, role: &Role) -> Result<String> {
        Ok(role.as_str().to_string())
    }

    fn mutate(&self, role: Role, _toggle: Toggle) -> Result<Role> {
        Ok(role.toggled())
    }

    fn render(&self, role: &Role) -> RoleView {
        RoleView {
            role: *role,
            attribute: role.as_str(),
            label: role.label(),
            switch_checked: *role == Role::Admin,
            stats: role.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::view_model::Binding;

    #[test]
    fn defaults_to_dark_and_client() {
        let store = MemoryStore::new();
        assert_eq!(Binding::new(&store, ThemeSetting).load(), Theme::Dark);
        assert_eq!(Binding::new(&store, RoleSetting).load(), Role::Client);
    }

    #[test]
    fn theme_toggle_writes_raw_value() {
        let store = MemoryStore::new();
        let view = Binding::new(&store, ThemeSetting).dispatch(Toggle).unwrap();
        assert_eq!(view.attribute, "light");
        assert_eq!(view.icon, "fa-solid fa-moon");
        assert_eq!(store.get(keys::THEME).as_deref(), Some("light"));
    }

    #[test]
    fn legacy_theme_key_is_read() {
        let store = MemoryStore::new();
        store.set(keys::LEGACY_THEME, "light").unwrap();
        assert_eq!(ThemeSetting::load_with_legacy(&store), Theme::Light);
        store.set(keys::THEME, "dark").unwrap();
        assert_eq!(ThemeSetting::load_with_legacy(&store), Theme::Dark);
    }

    #[test]
    fn role_swaps_canned_stats() {
        let store = MemoryStore::new();
        store.set(keys::ROLE, "designer").unwrap();
        let binding = Binding::new(&store, RoleSetting);
        let view = binding.current_view();
        assert_eq!(view.label, "Admin / Designer Mode");
        assert!(view.switch_checked);
        assert_eq!(view.stats[2].value, "$15,230.00");

        let view = binding.dispatch(Toggle).unwrap();
        assert_eq!(view.role, Role::Client);
        assert_eq!(view.stats[0].value, "3");
        assert_eq!(store.get(keys::ROLE).as_deref(), Some("client"));
    }
}
