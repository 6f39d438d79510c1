//! Permission identifiers and the permission descriptors attached to views.
//!
//! A `Permission` is an opaque identifier such as `"reports.view_report"`.
//! Views declare what they require through a `ViewPermissions` descriptor
//! registered at application setup; menu nodes either declare their own
//! requirements or inherit the view's.

use serde::{Deserialize, Serialize};

/// An opaque permission identifier.
///
/// Identifiers are conventionally `app_label.codename`,
/// e.g. `"auth.add_group"` or `"reports.view_report"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Permission(pub String);

impl Permission {
    /// Construct a permission from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Permission {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Identifier of a bound view, as returned by `Router::resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(pub String);

impl ViewId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Permission metadata registered for a view.
///
/// Either list may be absent, which is treated the same as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPermissions {
    /// Every permission listed here must be held.
    #[serde(default)]
    pub permissions: Option<Vec<Permission>>,

    /// At least one permission listed here must be held.
    #[serde(default)]
    pub one_of_permissions: Option<Vec<Permission>>,
}

/// The effective requirements of a menu node after resolution.
///
/// Produced by `resolve_required_permissions`; both sets are always present
/// (possibly empty) so callers never deal with "unset" here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredPermissions {
    /// ALL of these must be held.
    pub all_of: Vec<Permission>,
    /// AT LEAST ONE of these must be held.
    pub one_of: Vec<Permission>,
}

impl RequiredPermissions {
    /// Return true when neither set names a permission.
    pub fn is_empty(&self) -> bool {
        self.all_of.is_empty() && self.one_of.is_empty()
    }
}

impl From<ViewPermissions> for RequiredPermissions {
    fn from(view: ViewPermissions) -> Self {
        Self {
            all_of: view.permissions.unwrap_or_default(),
            one_of: view.one_of_permissions.unwrap_or_default(),
        }
    }
}
