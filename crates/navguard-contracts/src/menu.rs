//! Declarative menu tree types.
//!
//! A menu is an ordered list of sections; each section is a `MenuNode` whose
//! `nodes` hold links or nested trees. Trees are loaded once from settings
//! and never mutated afterwards. Everything derived per request (resolved
//! URLs, permission sets, visibility) lives outside the node.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::permission::Permission;

/// Route value meaning "no real destination yet".
pub const PLACEHOLDER_ROUTE: &str = "#";

/// One entry of a menu tree: a section, an expandable tree, or a link.
///
/// ```toml
/// [[menu]]
/// text = "Reports"
///
/// [[menu.nodes]]
/// route = "reports:list"
/// text = "All reports"
/// icon = "fa fa-table"
/// one_of_permissions = ["reports.view_report"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Display label.
    #[serde(default)]
    pub text: String,

    /// Logical route name, or `"#"` as a placeholder.
    #[serde(default)]
    pub route: Option<String>,

    /// Positional arguments passed to `Router::reverse`.
    #[serde(default)]
    pub route_args: Vec<String>,

    /// Named arguments passed to `Router::reverse`.
    #[serde(default)]
    pub route_kwargs: BTreeMap<String, String>,

    /// Literal destination URL. Takes precedence over `route` for the link
    /// target, and is resolved directly when the route is a placeholder.
    #[serde(default)]
    pub url: Option<String>,

    /// Permissions that must ALL be held. `Some` (even empty) disables
    /// inference from the destination view.
    #[serde(default)]
    pub permissions: Option<Vec<Permission>>,

    /// Permissions of which AT LEAST ONE must be held. `Some` (even empty)
    /// disables inference from the destination view.
    #[serde(default)]
    pub one_of_permissions: Option<Vec<Permission>>,

    /// Child nodes. A non-empty list makes this node a container.
    #[serde(default)]
    pub nodes: Option<Vec<MenuNode>>,

    #[serde(default)]
    pub icon: Option<String>,

    /// Non-interactive visual divider.
    #[serde(default)]
    pub separator: bool,

    /// Only mark the link active when the request path equals its URL.
    #[serde(default)]
    pub active_requires_exact_url_match: bool,

    /// Extra CSS class for the rendered link.
    #[serde(default)]
    pub class: String,

    /// Extra HTML attributes for the rendered link.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Name of a registered text hook that supplies the link text (and
    /// optionally its title) at render time, e.g. for badge counts.
    #[serde(default)]
    pub hook: Option<String>,

    #[serde(default)]
    pub hook_args: Vec<String>,

    #[serde(default)]
    pub hook_kwargs: BTreeMap<String, String>,
}

impl MenuNode {
    /// A leaf node pointing at `route`.
    pub fn link(text: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            route: Some(route.into()),
            ..Self::default()
        }
    }

    /// A container node holding `nodes`.
    pub fn tree(text: impl Into<String>, nodes: Vec<MenuNode>) -> Self {
        Self {
            text: text.into(),
            nodes: Some(nodes),
            ..Self::default()
        }
    }

    /// The divider inserted between menu groups.
    pub fn separator() -> Self {
        Self {
            nodes: Some(Vec::new()),
            separator: true,
            ..Self::default()
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_permissions<P: Into<Permission>>(mut self, perms: impl IntoIterator<Item = P>) -> Self {
        self.permissions = Some(perms.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_one_of_permissions<P: Into<Permission>>(
        mut self,
        perms: impl IntoIterator<Item = P>,
    ) -> Self {
        self.one_of_permissions = Some(perms.into_iter().map(Into::into).collect());
        self
    }

    /// Take the link text from the hook registered as `hook`.
    pub fn with_hook<S: Into<String>>(mut self, hook: impl Into<String>, args: impl IntoIterator<Item = S>) -> Self {
        self.hook = Some(hook.into());
        self.hook_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Children of this node; empty for leaves.
    pub fn children(&self) -> &[MenuNode] {
        self.nodes.as_deref().unwrap_or(&[])
    }

    /// True when the node has at least one child.
    pub fn is_container(&self) -> bool {
        !self.children().is_empty()
    }

    /// True when the route is the `"#"` placeholder.
    pub fn has_placeholder_route(&self) -> bool {
        self.route.as_deref() == Some(PLACEHOLDER_ROUTE)
    }

    /// True when the node declares either permission list itself.
    pub fn declares_permissions(&self) -> bool {
        self.permissions.is_some() || self.one_of_permissions.is_some()
    }

    /// A human-readable identifier for log and error messages.
    pub fn label(&self) -> &str {
        if !self.text.is_empty() {
            self.text.as_str()
        } else if let Some(route) = &self.route {
            route.as_str()
        } else if let Some(url) = &self.url {
            url.as_str()
        } else {
            "<unnamed>"
        }
    }
}
