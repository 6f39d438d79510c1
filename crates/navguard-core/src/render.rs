//! Turns a menu definition into a `RenderedMenu` for one request.
//!
//! The shape follows the sidebar templates: a menu is a list of sections,
//! a section holds nodes, and a node is either an expandable tree or a link.
//! Children of a section or tree the user cannot see are not rendered.

use tracing::{debug, warn};

use navguard_contracts::{
    error::{NavError, NavResult},
    menu::MenuNode,
    render::{RenderedMenu, RenderedNode, RenderedSection, VisibilityDecision},
};

use crate::{
    path::is_node_active,
    resolver::RenderPass,
    traits::HookContext,
};

/// Icon given to trees that do not declare one.
pub const DEFAULT_TREE_ICON: &str = "not-found";

/// The configured menu groups, in display order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuGroups<'m> {
    pub first: &'m [MenuNode],
    pub main: &'m [MenuNode],
    pub last: &'m [MenuNode],
}

impl<'m> MenuGroups<'m> {
    /// Concatenate the non-empty groups, placing a separator section between
    /// neighbouring groups when `use_separator` is set.
    pub fn assemble(&self, use_separator: bool) -> Vec<MenuNode> {
        let mut sections = Vec::new();
        for group in [self.first, self.main, self.last] {
            if group.is_empty() {
                continue;
            }
            if use_separator && !sections.is_empty() {
                sections.push(MenuNode::separator());
            }
            sections.extend(group.iter().cloned());
        }
        sections
    }
}

impl<'a> RenderPass<'a> {
    /// Render every section of `sections` for `request_path`.
    pub fn render_menu(&self, request_path: &str, sections: &[MenuNode]) -> NavResult<RenderedMenu> {
        let sections = sections
            .iter()
            .map(|section| self.render_section(request_path, section))
            .collect::<NavResult<Vec<_>>>()?;

        debug!(
            request_path = %request_path,
            sections = sections.len(),
            "menu rendered"
        );
        Ok(RenderedMenu { sections })
    }

    /// Render one section. Separators are always shown and carry no nodes.
    pub fn render_section(&self, request_path: &str, section: &MenuNode) -> NavResult<RenderedSection> {
        if section.separator {
            return Ok(RenderedSection {
                text: section.text.clone(),
                separator: true,
                allowed: true,
                nodes: Vec::new(),
            });
        }

        let allowed = self.section_has_any_visible_leaf(section.children())?;
        let nodes = if allowed {
            self.render_nodes(request_path, section.children())?
        } else {
            Vec::new()
        };

        Ok(RenderedSection {
            text: section.text.clone(),
            separator: false,
            allowed,
            nodes,
        })
    }

    /// Render a list of sibling nodes.
    pub fn render_nodes(&self, request_path: &str, nodes: &[MenuNode]) -> NavResult<Vec<RenderedNode>> {
        nodes
            .iter()
            .map(|node| {
                if node.is_container() {
                    self.render_tree(request_path, node)
                } else {
                    self.render_link(request_path, node)
                }
            })
            .collect()
    }

    /// Render an expandable tree node.
    ///
    /// The tree is active when its own URL or any direct child's URL matches
    /// the request path, and expanded when any descendant leaf matches.
    pub fn render_tree(&self, request_path: &str, node: &MenuNode) -> NavResult<RenderedNode> {
        let resolver = self.resolver();
        let url = resolver.ensure_url(node, false)?;
        let allowed = self.section_has_any_visible_leaf(node.children())?;
        let expanded = resolver.node_matches_active_path(request_path, node.children())?;

        let mut active = is_node_active(node, &url, request_path);
        for child in node.children() {
            let child_url = resolver.ensure_url(child, false)?;
            active |= is_node_active(child, &child_url, request_path);
        }

        let nodes = if allowed {
            self.render_nodes(request_path, node.children())?
        } else {
            Vec::new()
        };

        Ok(RenderedNode::Tree {
            text: node.text.clone(),
            icon: non_empty_or(&node.icon, DEFAULT_TREE_ICON),
            url,
            decision: VisibilityDecision { allowed, active },
            expanded,
            nodes,
        })
    }

    /// Render a clickable link.
    pub fn render_link(&self, request_path: &str, node: &MenuNode) -> NavResult<RenderedNode> {
        let url = self.resolver().ensure_url(node, true)?;
        let allowed = self.is_node_visible(node)?;
        let active = is_node_active(node, &url, request_path);
        let (text, title) = self.link_text(request_path, node)?;

        Ok(RenderedNode::Link {
            text,
            title,
            icon: non_empty_or(&node.icon, ""),
            url,
            class: node.class.clone(),
            attributes: node.attributes.clone(),
            decision: VisibilityDecision { allowed, active },
        })
    }

    /// Return a link's `(text, title)`, asking the node's hook when it names one.
    fn link_text(&self, request_path: &str, node: &MenuNode) -> NavResult<(String, String)> {
        let Some(hook) = node.hook.as_deref() else {
            return Ok((node.text.clone(), node.text.clone()));
        };

        let context = HookContext {
            request_path,
            user: self.user(),
        };
        let output = self
            .resolver()
            .hooks()
            .and_then(|hooks| hooks.call(hook, &node.hook_args, &node.hook_kwargs, &context));

        match output {
            Some((text, title)) => {
                debug!(node = %node.label(), hook = %hook, "link text from hook");
                let title = title.unwrap_or_else(|| text.clone());
                Ok((text, title))
            }
            None => {
                warn!(node = %node.label(), hook = %hook, "text hook is not registered");
                Err(NavError::Hook {
                    text: node.label().to_string(),
                    hook: hook.to_string(),
                })
            }
        }
    }
}

/// Drop every section and node the user is not allowed to see.
pub fn visible_only(menu: RenderedMenu) -> RenderedMenu {
    let sections = menu
        .sections
        .into_iter()
        .filter(|section| section.allowed)
        .map(|section| RenderedSection {
            nodes: visible_nodes(section.nodes),
            ..section
        })
        .collect();
    RenderedMenu { sections }
}

fn visible_nodes(nodes: Vec<RenderedNode>) -> Vec<RenderedNode> {
    nodes
        .into_iter()
        .filter(|node| node.decision().allowed)
        .map(|node| match node {
            RenderedNode::Tree { text, icon, url, decision, expanded, nodes } => RenderedNode::Tree {
                text,
                icon,
                url,
                decision,
                expanded,
                nodes: visible_nodes(nodes),
            },
            link => link,
        })
        .collect()
}

fn non_empty_or(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
