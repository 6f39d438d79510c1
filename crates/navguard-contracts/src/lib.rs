//! # navguard-contracts
//!
//! Shared types for the navguard sidebar-menu resolver.
//!
//! All crates in the workspace import from here. No resolution logic lives in
//! this crate, only data definitions, small helpers, and error types.

pub mod error;
pub mod menu;
pub mod permission;
pub mod render;

#[cfg(test)]
mod tests {
    use super::*;
    use error::NavError;
    use menu::MenuNode;
    use permission::{Permission, RequiredPermissions, ViewPermissions};
    use render::{RenderedNode, VisibilityDecision};

    // ── MenuNode ─────────────────────────────────────────────────────────────

    #[test]
    fn menu_node_deserializes_nested_tree() {
        let json = r##"{
            "text": "Samples",
            "nodes": [
                { "route": "sample1", "text": "Sample1", "icon": "fa fa-group" },
                { "text": "Sample Tree", "nodes": [
                    { "route": "#", "url": "/sample2#top", "text": "Sample2" }
                ]}
            ]
        }"##;

        let node: MenuNode = serde_json::from_str(json).unwrap();

        assert!(node.is_container());
        assert_eq!(node.children().len(), 2);
        assert!(!node.children()[0].is_container());
        assert_eq!(node.children()[0].icon.as_deref(), Some("fa fa-group"));

        let leaf = &node.children()[1].children()[0];
        assert!(leaf.has_placeholder_route());
        assert_eq!(leaf.url.as_deref(), Some("/sample2#top"));
        assert!(!leaf.separator);
    }

    #[test]
    fn menu_node_distinguishes_absent_from_empty_permissions() {
        let absent: MenuNode = serde_json::from_str(r#"{ "route": "home" }"#).unwrap();
        let empty: MenuNode =
            serde_json::from_str(r#"{ "route": "home", "permissions": [] }"#).unwrap();

        assert!(!absent.declares_permissions());
        assert!(empty.declares_permissions());
        assert_eq!(empty.permissions, Some(Vec::new()));
    }

    #[test]
    fn menu_node_carries_route_kwargs_and_hook() {
        let json = r#"{
            "route": "reports:detail",
            "route_kwargs": { "slug": "finance" },
            "hook": "inbox_badge",
            "hook_args": ["7"],
            "hook_kwargs": { "label": "Inbox" }
        }"#;

        let node: MenuNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.route_kwargs.get("slug").map(String::as_str), Some("finance"));
        assert_eq!(node.hook.as_deref(), Some("inbox_badge"));
        assert_eq!(node.hook_args, vec!["7".to_string()]);
        assert_eq!(node.hook_kwargs.get("label").map(String::as_str), Some("Inbox"));

        let plain: MenuNode = serde_json::from_str(r#"{ "route": "home" }"#).unwrap();
        assert!(plain.hook.is_none());
        assert!(plain.route_kwargs.is_empty());
    }

    #[test]
    fn menu_node_with_empty_nodes_is_a_leaf() {
        let node = MenuNode::separator();
        assert!(!node.is_container());
        assert!(node.children().is_empty());
        assert!(node.separator);
    }

    #[test]
    fn menu_node_label_falls_back_to_route_then_url() {
        assert_eq!(MenuNode::link("Home", "home").label(), "Home");
        assert_eq!(MenuNode::link("", "home").label(), "home");

        let url_only = MenuNode::default().with_url("/docs/");
        assert_eq!(url_only.label(), "/docs/");
        assert_eq!(MenuNode::default().label(), "<unnamed>");
    }

    // ── Permissions ──────────────────────────────────────────────────────────

    #[test]
    fn view_permissions_convert_missing_lists_to_empty() {
        let view = ViewPermissions {
            permissions: None,
            one_of_permissions: Some(vec![Permission::new("reports.view_report")]),
        };

        let required = RequiredPermissions::from(view);

        assert!(required.all_of.is_empty());
        assert_eq!(required.one_of, vec![Permission::new("reports.view_report")]);
        assert!(!required.is_empty());
        assert!(RequiredPermissions::default().is_empty());
    }

    #[test]
    fn permission_serializes_as_plain_string() {
        let json = serde_json::to_string(&vec![Permission::new("auth.add_group")]).unwrap();
        assert_eq!(json, r#"["auth.add_group"]"#);
    }

    // ── Errors ───────────────────────────────────────────────────────────────

    #[test]
    fn routing_error_names_route_and_placeholder_convention() {
        let err = NavError::Routing {
            route: "reports:missing".to_string(),
            reason: "no route named 'reports:missing'".to_string(),
        };
        let msg = err.to_string();

        assert!(msg.contains("'reports:missing' is not a valid route"), "got: {msg}");
        assert!(msg.contains("'#' as a placeholder"), "got: {msg}");
    }

    #[test]
    fn configuration_error_names_node_and_missing_key() {
        let err = NavError::Configuration {
            text: "Orphan".to_string(),
            key: "route".to_string(),
        };
        let msg = err.to_string();

        assert!(msg.contains("'route' key"), "got: {msg}");
        assert!(msg.contains("'Orphan'"), "got: {msg}");
    }

    #[test]
    fn hook_error_names_node_and_hook() {
        let err = NavError::Hook {
            text: "Inbox".to_string(),
            hook: "inbox_badge".to_string(),
        };
        let msg = err.to_string();

        assert!(msg.contains("'inbox_badge'"), "got: {msg}");
        assert!(msg.contains("'Inbox'"), "got: {msg}");
    }

    // ── Rendered output ──────────────────────────────────────────────────────

    #[test]
    fn rendered_node_is_tagged_by_kind() {
        let node = RenderedNode::Link {
            text: "Home".to_string(),
            title: "Home".to_string(),
            icon: String::new(),
            url: "/".to_string(),
            class: String::new(),
            attributes: Default::default(),
            decision: VisibilityDecision { allowed: true, active: false },
        };

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["kind"], "link");
        assert_eq!(value["decision"]["allowed"], true);
        assert_eq!(node.text(), "Home");
        assert!(node.decision().allowed);
    }
}
