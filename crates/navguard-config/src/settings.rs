//! Sidebar settings loaded from TOML.
//!
//! `SidebarSettings` is read once at startup and handed by reference to
//! whatever builds the resolver. Nothing in navguard reads ambient global
//! state.
//!
//! ```toml
//! use_whitelist_for_undefined_permissions = true
//! whitelist = ["password_change", "#"]
//!
//! [[menu]]
//! text = "Reports"
//!
//! [[menu.nodes]]
//! route = "reports:list"
//! text = "All reports"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use navguard_contracts::{
    error::{NavError, NavResult},
    menu::MenuNode,
};
use navguard_core::{AccessPolicy, MenuGroups};

use crate::defaults::{default_menu, default_whitelist};

/// Everything configurable about the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSettings {
    /// Routes exempt from permission checks under whitelist fallback.
    #[serde(default = "default_whitelist")]
    pub whitelist: Vec<String>,

    /// Treat the whitelist as the only way past missing permissions.
    #[serde(default)]
    pub use_whitelist_for_undefined_permissions: bool,

    /// Insert a separator section between menu groups.
    #[serde(default = "default_true")]
    pub use_menu_group_separator: bool,

    /// Sections shown before the main menu.
    #[serde(default)]
    pub menu_first: Vec<MenuNode>,

    /// The main menu. Defaults to the built-in menu.
    #[serde(default = "default_menu")]
    pub menu: Vec<MenuNode>,

    /// Sections shown after the main menu.
    #[serde(default)]
    pub menu_last: Vec<MenuNode>,
}

fn default_true() -> bool {
    true
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            whitelist: default_whitelist(),
            use_whitelist_for_undefined_permissions: false,
            use_menu_group_separator: true,
            menu_first: Vec::new(),
            menu: default_menu(),
            menu_last: Vec::new(),
        }
    }
}

impl SidebarSettings {
    /// Parse `s` as TOML settings.
    ///
    /// Returns `NavError::Settings` if the TOML is malformed or does not
    /// match the expected schema.
    pub fn from_toml_str(s: &str) -> NavResult<Self> {
        let settings: Self = toml::from_str(s).map_err(|e| {
            warn!(error = %e, "failed to parse sidebar settings");
            NavError::Settings {
                reason: format!("failed to parse sidebar settings TOML: {}", e),
            }
        })?;

        debug!(
            sections = settings.menu_first.len() + settings.menu.len() + settings.menu_last.len(),
            whitelist = settings.whitelist.len(),
            whitelist_fallback = settings.use_whitelist_for_undefined_permissions,
            "sidebar settings loaded"
        );
        Ok(settings)
    }

    /// Read the file at `path` and parse it as TOML settings.
    pub fn from_file(path: &Path) -> NavResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| NavError::Settings {
            reason: format!("failed to read settings file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The access policy the resolver should enforce.
    pub fn access_policy(&self) -> AccessPolicy {
        AccessPolicy::new(
            self.whitelist.iter().cloned(),
            self.use_whitelist_for_undefined_permissions,
        )
    }

    pub fn groups(&self) -> MenuGroups<'_> {
        MenuGroups {
            first: &self.menu_first,
            main: &self.menu,
            last: &self.menu_last,
        }
    }

    /// All sections in display order, separators included.
    pub fn sections(&self) -> Vec<MenuNode> {
        self.groups().assemble(self.use_menu_group_separator)
    }
}
