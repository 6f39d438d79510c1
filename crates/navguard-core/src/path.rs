//! URL normalization helpers used for active-state highlighting.
//!
//! Nothing here takes part in access decisions.

use navguard_contracts::menu::MenuNode;

/// Strip a `#fragment` from `url`.
pub fn strip_fragment(url: &str) -> &str {
    match url.find('#') {
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// Return true if `search` starts with `prefix` once both are fragment-stripped.
pub fn url_starts_with(search: &str, prefix: &str) -> bool {
    strip_fragment(search).starts_with(strip_fragment(prefix))
}

/// Return true if `request_path` lies under `node_url`.
///
/// A node URL that is empty after stripping (the `"#"` placeholder) never
/// matches, otherwise every placeholder would be active on every page.
pub fn path_matches_node_url(request_path: &str, node_url: &str) -> bool {
    let node_url = strip_fragment(node_url);
    !node_url.is_empty() && strip_fragment(request_path).starts_with(node_url)
}

/// Return true if `node`, linking to `url`, should be highlighted for
/// `request_path`: an exact comparison when the node asks for one, the
/// prefix match otherwise.
pub fn is_node_active(node: &MenuNode, url: &str, request_path: &str) -> bool {
    if node.active_requires_exact_url_match {
        request_path == url
    } else {
        path_matches_node_url(request_path, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_fragment_removes_bookmark() {
        assert_eq!(strip_fragment("/app/settings/#profile"), "/app/settings/");
        assert_eq!(strip_fragment("/app/settings/"), "/app/settings/");
        assert_eq!(strip_fragment("#"), "");
        assert_eq!(strip_fragment(""), "");
    }

    #[test]
    fn url_starts_with_ignores_fragments() {
        assert!(url_starts_with("/app/settings/profile#x", "/app/settings/#y"));
        assert!(!url_starts_with("/app/billing/", "/app/settings/"));
    }

    #[test]
    fn prefix_match_for_active_paths() {
        assert!(path_matches_node_url("/app/settings/profile", "/app/settings/"));
        assert!(path_matches_node_url("/app/settings/", "/app/settings/#top"));
        assert!(!path_matches_node_url("/app/billing/", "/app/settings/"));
    }

    #[test]
    fn placeholder_url_never_matches() {
        assert!(!path_matches_node_url("/anything/", "#"));
        assert!(!path_matches_node_url("/anything/", ""));
    }

    #[test]
    fn exact_match_nodes_compare_whole_paths() {
        let mut node = MenuNode::link("Home", "home");
        assert!(is_node_active(&node, "/", "/reports/"));

        node.active_requires_exact_url_match = true;
        assert!(is_node_active(&node, "/", "/"));
        assert!(!is_node_active(&node, "/", "/reports/"));
    }

    #[test]
    fn placeholder_link_is_not_active_under_exact_match_either() {
        let mut node = MenuNode::link("Soon", "#");
        assert!(!is_node_active(&node, "#", "/reports/"));

        node.active_requires_exact_url_match = true;
        assert!(!is_node_active(&node, "#", "/reports/"));
    }
}
