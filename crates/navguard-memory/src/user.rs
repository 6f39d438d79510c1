//! A user with a fixed permission set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use navguard_contracts::permission::Permission;
use navguard_core::traits::PermissionStore;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticUser {
    pub username: String,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub permissions: HashSet<Permission>,
}

impl StaticUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    pub fn superuser(username: impl Into<String>) -> Self {
        Self {
            is_superuser: true,
            ..Self::new(username)
        }
    }

    /// Grant a permission to this user.
    pub fn grant(&mut self, permission: impl Into<Permission>) {
        self.permissions.insert(permission.into());
    }

    pub fn with_permissions<P: Into<Permission>>(mut self, permissions: impl IntoIterator<Item = P>) -> Self {
        self.permissions.extend(permissions.into_iter().map(Into::into));
        self
    }
}

impl PermissionStore for StaticUser {
    fn is_superuser(&self) -> bool {
        self.is_superuser
    }

    fn has_permission(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }
}
