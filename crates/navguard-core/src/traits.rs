//! Collaborator traits for the menu access resolver.
//!
//! The resolver never routes requests, stores permissions, or inspects view
//! code itself. Three collaborators supply that knowledge:
//!
//! - `Router`          — maps route names to URLs and URLs to views
//! - `PermissionStore` — answers permission questions for the current user
//! - `ViewMetadata`    — exposes the permissions a view was registered with
//!
//! A fourth, `TextHooks`, is optional and only consulted by the renderer for
//! links that name a hook.
//!
//! Implementations are expected to be synchronous, in-memory lookups.

use std::collections::BTreeMap;

use navguard_contracts::permission::{Permission, ViewId, ViewPermissions};

/// The routing layer of the host application.
pub trait Router: Send + Sync {
    /// Build the URL for `route`, filling positional `args` and named `kwargs`.
    ///
    /// Returns `None` when no route with that name accepts those arguments.
    fn reverse(&self, route: &str, args: &[String], kwargs: &BTreeMap<String, String>) -> Option<String>;

    /// Find the view bound to `url`.
    ///
    /// Returns `None` when nothing matches. A URL that does not resolve is
    /// not an error for the resolver; the node simply has no view metadata.
    fn resolve(&self, url: &str) -> Option<ViewId>;
}

/// Permission answers for one user.
///
/// Implemented by the host's user or session object. Methods never fail;
/// an unknown permission is simply not held.
pub trait PermissionStore {
    /// Superusers pass every permission check.
    fn is_superuser(&self) -> bool;

    /// Return true if the user holds `permission`.
    fn has_permission(&self, permission: &Permission) -> bool;

    /// Return true if the user holds every permission in `permissions`.
    fn has_permissions(&self, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.has_permission(p))
    }
}

/// Registry of permission descriptors keyed by view.
pub trait ViewMetadata: Send + Sync {
    /// Return the descriptor registered for `view`, if any.
    fn permissions_for(&self, view: &ViewId) -> Option<ViewPermissions>;
}

/// What a text hook gets to see about the current render.
#[derive(Clone, Copy)]
pub struct HookContext<'c> {
    pub request_path: &'c str,
    pub user: &'c dyn PermissionStore,
}

/// Functions that compute a link's text at render time.
pub trait TextHooks: Send + Sync {
    /// Call the hook registered as `hook`.
    ///
    /// Returns the link text and an optional title (the text is reused when
    /// no title is given), or `None` when no hook has that name.
    fn call(
        &self,
        hook: &str,
        args: &[String],
        kwargs: &BTreeMap<String, String>,
        context: &HookContext<'_>,
    ) -> Option<(String, Option<String>)>;
}
