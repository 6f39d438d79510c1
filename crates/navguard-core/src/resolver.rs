//! The menu access resolver.
//!
//! Two concerns are kept apart here:
//!
//!   Permissions:  node → required permissions → user check → whitelist/default policy
//!   Active path:  node → URL → fragment-stripped prefix match
//!
//! `MenuAccessResolver` holds the long-lived, user-independent pieces
//! (policy, router, view registry) and answers URL questions. A `RenderPass`
//! binds it to one user for one request and answers visibility questions,
//! caching each destination's derived permissions for the pass only.
//!
//! A path match never grants or denies access.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap, HashSet},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use navguard_contracts::{
    error::{NavError, NavResult},
    menu::{MenuNode, PLACEHOLDER_ROUTE},
    permission::{Permission, RequiredPermissions},
};

use crate::{
    path::{path_matches_node_url, strip_fragment},
    traits::{PermissionStore, Router, TextHooks, ViewMetadata},
};

// ── Policy ────────────────────────────────────────────────────────────────────

/// Process-wide access settings, fixed at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    /// Routes exempt from permission checks when
    /// `use_whitelist_for_undefined_permissions` is set.
    #[serde(default)]
    pub whitelist: HashSet<String>,

    /// When set, a node the user lacks permissions for is still visible if
    /// its route is whitelisted, and nodes without any permissions are
    /// hidden unless whitelisted.
    #[serde(default)]
    pub use_whitelist_for_undefined_permissions: bool,
}

impl AccessPolicy {
    pub fn new<S: Into<String>>(
        whitelist: impl IntoIterator<Item = S>,
        use_whitelist_for_undefined_permissions: bool,
    ) -> Self {
        Self {
            whitelist: whitelist.into_iter().map(Into::into).collect(),
            use_whitelist_for_undefined_permissions,
        }
    }

    /// Return true if the node's route is in the whitelist.
    pub fn is_whitelisted(&self, node: &MenuNode) -> bool {
        node.route
            .as_deref()
            .is_some_and(|route| self.whitelist.contains(route))
    }
}

// ── Permission checks ─────────────────────────────────────────────────────────

/// Return true if `user` holds every permission in `permissions`.
///
/// An empty set is never satisfied by a regular user: it means "no explicit
/// permission basis" and is left to the whitelist/default policy.
pub fn user_satisfies_all(user: &dyn PermissionStore, permissions: &[Permission]) -> bool {
    if user.is_superuser() {
        return true;
    }
    !permissions.is_empty() && user.has_permissions(permissions)
}

/// Return true if `user` holds at least one permission in `permissions`.
///
/// An empty set is never satisfied by a regular user.
pub fn user_satisfies_one(user: &dyn PermissionStore, permissions: &[Permission]) -> bool {
    if user.is_superuser() {
        return true;
    }
    permissions.iter().any(|p| user.has_permission(p))
}

// ── Resolver ──────────────────────────────────────────────────────────────────

/// Where a leaf node's permissions are looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Destination {
    Route {
        name: String,
        args: Vec<String>,
        kwargs: BTreeMap<String, String>,
    },
    Url(String),
}

/// The user-independent half of menu resolution.
///
/// Cheap to copy; construct once at startup and call `pass()` per request.
#[derive(Clone, Copy)]
pub struct MenuAccessResolver<'a> {
    policy: &'a AccessPolicy,
    router: &'a dyn Router,
    views: &'a dyn ViewMetadata,
    hooks: Option<&'a dyn TextHooks>,
}

impl<'a> MenuAccessResolver<'a> {
    pub fn new(policy: &'a AccessPolicy, router: &'a dyn Router, views: &'a dyn ViewMetadata) -> Self {
        Self {
            policy,
            router,
            views,
            hooks: None,
        }
    }

    /// Attach the text hooks links may name. Without them, any link that
    /// names a hook fails to render.
    pub fn with_hooks(mut self, hooks: &'a dyn TextHooks) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn policy(&self) -> &'a AccessPolicy {
        self.policy
    }

    /// Start a render pass for `user`.
    pub fn pass(&self, user: &'a dyn PermissionStore) -> RenderPass<'a> {
        RenderPass {
            resolver: *self,
            user,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Return the URL a node links to.
    ///
    /// A literal `url` wins. Otherwise the route is reversed, with the `"#"`
    /// placeholder yielding `"#"`. A node without a route is an error when
    /// `required`, and a `"#"` link otherwise (trees need no destination).
    pub fn ensure_url(&self, node: &MenuNode, required: bool) -> NavResult<String> {
        if let Some(url) = &node.url {
            return Ok(url.clone());
        }

        match node.route.as_deref() {
            Some(PLACEHOLDER_ROUTE) => Ok(PLACEHOLDER_ROUTE.to_string()),
            Some(route) => self.reverse(route, &node.route_args, &node.route_kwargs),
            None if required => Err(missing_route(node)),
            None => Ok(PLACEHOLDER_ROUTE.to_string()),
        }
    }

    /// Return true if any leaf under `nodes` lies on `request_path`.
    ///
    /// Every leaf is visited so that a misconfigured node surfaces even when
    /// an earlier sibling already matched.
    pub fn node_matches_active_path(&self, request_path: &str, nodes: &[MenuNode]) -> NavResult<bool> {
        nodes.iter().try_fold(false, |matched, node| -> NavResult<bool> {
            let hit = if node.is_container() {
                self.node_matches_active_path(request_path, node.children())?
            } else {
                let url = self.ensure_url(node, true)?;
                path_matches_node_url(request_path, &url)
            };
            Ok(matched || hit)
        })
    }

    pub(crate) fn hooks(&self) -> Option<&'a dyn TextHooks> {
        self.hooks
    }

    fn reverse(&self, route: &str, args: &[String], kwargs: &BTreeMap<String, String>) -> NavResult<String> {
        self.router.reverse(route, args, kwargs).ok_or_else(|| {
            warn!(route = %route, args = ?args, kwargs = ?kwargs, "route did not reverse");
            let names: Vec<&str> = kwargs.keys().map(String::as_str).collect();
            NavError::Routing {
                route: route.to_string(),
                reason: format!(
                    "no route named '{}' accepting {} positional argument(s) and keyword(s) [{}]",
                    route,
                    args.len(),
                    names.join(", ")
                ),
            }
        })
    }

    /// Work out where a leaf's permissions come from, if anywhere.
    fn destination(&self, node: &MenuNode) -> NavResult<Option<Destination>> {
        let url = node
            .url
            .as_deref()
            .map(strip_fragment)
            .filter(|url| !url.is_empty());

        match (node.route.as_deref(), url) {
            (Some(PLACEHOLDER_ROUTE), Some(url)) | (None, Some(url)) => {
                Ok(Some(Destination::Url(url.to_string())))
            }
            (Some(PLACEHOLDER_ROUTE), None) => Ok(None),
            (Some(route), _) => Ok(Some(Destination::Route {
                name: route.to_string(),
                args: node.route_args.clone(),
                kwargs: node.route_kwargs.clone(),
            })),
            (None, None) => Err(missing_route(node)),
        }
    }

    /// Look up the view behind `destination` and read its metadata.
    fn view_permissions(&self, destination: &Destination) -> NavResult<RequiredPermissions> {
        let url = match destination {
            Destination::Route { name, args, kwargs } => self.reverse(name, args, kwargs)?,
            Destination::Url(url) => url.clone(),
        };

        let Some(view) = self.router.resolve(&url) else {
            debug!(url = %url, "url resolved to no view; no permissions inferred");
            return Ok(RequiredPermissions::default());
        };

        let required = self
            .views
            .permissions_for(&view)
            .map(RequiredPermissions::from)
            .unwrap_or_default();

        debug!(
            view = %view,
            all_of = required.all_of.len(),
            one_of = required.one_of.len(),
            "inferred permissions from view"
        );
        Ok(required)
    }
}

fn missing_route(node: &MenuNode) -> NavError {
    warn!(node = %node.label(), "menu node has neither route nor url");
    NavError::Configuration {
        text: node.label().to_string(),
        key: "route".to_string(),
    }
}

// ── Render pass ───────────────────────────────────────────────────────────────

/// One user's view of the menu for one request.
///
/// Holds the only mutable state in the resolver: a cache of derived
/// permissions keyed by destination. Dropped at the end of the request, so
/// nothing leaks between users or requests.
pub struct RenderPass<'a> {
    pub(crate) resolver: MenuAccessResolver<'a>,
    pub(crate) user: &'a dyn PermissionStore,
    cache: RefCell<HashMap<Destination, RequiredPermissions>>,
}

impl<'a> RenderPass<'a> {
    pub fn resolver(&self) -> &MenuAccessResolver<'a> {
        &self.resolver
    }

    pub fn user(&self) -> &'a dyn PermissionStore {
        self.user
    }

    /// Return the permissions a node requires.
    ///
    /// Permissions declared on the node always win, even when declared
    /// empty; the undeclared sibling list is then taken as empty. Only a
    /// node declaring neither list falls back to its destination view.
    pub fn resolve_required_permissions(&self, node: &MenuNode) -> NavResult<RequiredPermissions> {
        if node.declares_permissions() {
            return Ok(RequiredPermissions {
                all_of: node.permissions.clone().unwrap_or_default(),
                one_of: node.one_of_permissions.clone().unwrap_or_default(),
            });
        }

        let Some(destination) = self.resolver.destination(node)? else {
            return Ok(RequiredPermissions::default());
        };

        if let Some(cached) = self.cache.borrow().get(&destination) {
            debug!(node = %node.label(), "permission cache hit");
            return Ok(cached.clone());
        }

        let required = self.resolver.view_permissions(&destination)?;
        self.cache.borrow_mut().insert(destination, required.clone());
        Ok(required)
    }

    /// Decide whether a leaf node is visible to the pass's user.
    ///
    /// 1. Permissions granted by the all-of or one-of set allow the node.
    /// 2. With whitelist fallback on, a whitelisted route is allowed too,
    ///    and anything else is denied.
    /// 3. With it off, declared permissions gate the node; a node with no
    ///    permissions anywhere is public.
    pub fn is_node_visible(&self, node: &MenuNode) -> NavResult<bool> {
        let required = self.resolve_required_permissions(node)?;

        let allowed_by_perms = user_satisfies_all(self.user, &required.all_of)
            || user_satisfies_one(self.user, &required.one_of);

        let policy = self.resolver.policy;
        let visible = if policy.use_whitelist_for_undefined_permissions {
            allowed_by_perms || policy.is_whitelisted(node)
        } else if !required.is_empty() {
            allowed_by_perms
        } else {
            true
        };

        debug!(
            node = %node.label(),
            allowed_by_perms,
            visible,
            "node visibility decided"
        );
        Ok(visible)
    }

    /// Return true if at least one leaf under `nodes` is visible.
    ///
    /// Superusers short-circuit to true. An empty list is false.
    pub fn section_has_any_visible_leaf(&self, nodes: &[MenuNode]) -> NavResult<bool> {
        if self.user.is_superuser() {
            return Ok(true);
        }
        self.any_visible_leaf(nodes)
    }

    fn any_visible_leaf(&self, nodes: &[MenuNode]) -> NavResult<bool> {
        for node in nodes {
            let visible = if node.is_container() {
                self.any_visible_leaf(node.children())?
            } else {
                self.is_node_visible(node)?
            };
            if visible {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// See `MenuAccessResolver::node_matches_active_path`.
    pub fn node_matches_active_path(&self, request_path: &str, nodes: &[MenuNode]) -> NavResult<bool> {
        self.resolver.node_matches_active_path(request_path, nodes)
    }
}
