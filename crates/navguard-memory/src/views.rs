//! Explicit view → permission registration.
//!
//! Views declare their requirements here at application setup instead of
//! carrying them as runtime attributes. The menu resolver reads them back
//! through the `ViewMetadata` trait.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use navguard_contracts::permission::{Permission, ViewId, ViewPermissions};
use navguard_core::traits::ViewMetadata;

/// A fixed table of view descriptors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewRegistry {
    views: HashMap<String, ViewPermissions>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the descriptor for `view`.
    pub fn register(&mut self, view: impl Into<String>, permissions: ViewPermissions) {
        let view = view.into();
        debug!(view = %view, "view permissions registered");
        self.views.insert(view, permissions);
    }

    /// Declare that `view` requires ALL of `permissions`.
    pub fn requires_all<P: Into<Permission>>(
        mut self,
        view: impl Into<String>,
        permissions: impl IntoIterator<Item = P>,
    ) -> Self {
        let view = view.into();
        let entry = self.views.entry(view).or_default();
        entry.permissions = Some(permissions.into_iter().map(Into::into).collect());
        self
    }

    /// Declare that `view` requires AT LEAST ONE of `permissions`.
    pub fn requires_one<P: Into<Permission>>(
        mut self,
        view: impl Into<String>,
        permissions: impl IntoIterator<Item = P>,
    ) -> Self {
        let view = view.into();
        let entry = self.views.entry(view).or_default();
        entry.one_of_permissions = Some(permissions.into_iter().map(Into::into).collect());
        self
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl ViewMetadata for ViewRegistry {
    fn permissions_for(&self, view: &ViewId) -> Option<ViewPermissions> {
        self.views.get(&view.0).cloned()
    }
}
