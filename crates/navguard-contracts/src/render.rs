//! Presentation-ready output of a render pass.
//!
//! These types carry decisions only; they are built fresh for every request
//! and user and are never cached or persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-node outcome of a render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityDecision {
    /// The current user may see this node.
    pub allowed: bool,
    /// The node lies on the current request path. Styling only.
    pub active: bool,
}

/// The whole sidebar for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedMenu {
    pub sections: Vec<RenderedSection>,
}

/// A top-level grouping of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSection {
    pub text: String,
    pub separator: bool,
    /// At least one leaf below this section is visible to the user.
    pub allowed: bool,
    pub nodes: Vec<RenderedNode>,
}

/// A rendered tree or link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedNode {
    /// An expandable node with children.
    Tree {
        text: String,
        icon: String,
        url: String,
        decision: VisibilityDecision,
        /// Some descendant matches the request path; render expanded.
        expanded: bool,
        nodes: Vec<RenderedNode>,
    },

    /// A clickable entry.
    Link {
        text: String,
        title: String,
        icon: String,
        url: String,
        class: String,
        attributes: BTreeMap<String, String>,
        decision: VisibilityDecision,
    },
}

impl RenderedNode {
    pub fn decision(&self) -> VisibilityDecision {
        match self {
            RenderedNode::Tree { decision, .. } | RenderedNode::Link { decision, .. } => *decision,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            RenderedNode::Tree { text, .. } | RenderedNode::Link { text, .. } => text,
        }
    }
}
