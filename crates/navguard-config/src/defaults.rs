//! Built-in menu and whitelist.
//!
//! Used when the settings file does not define its own `menu` or
//! `whitelist`. Route names are namespaced under `navguard:` except for the
//! password-change route, which hosts conventionally provide themselves.

use navguard_contracts::menu::MenuNode;

pub const HOME_ROUTE: &str = "navguard:home";
pub const DEMO_CSS_ROUTE: &str = "navguard:demo-css";
pub const REGISTER_ROUTE: &str = "navguard:register";
pub const PASSWORD_CHANGE_ROUTE: &str = "password_change";
pub const SAMPLE_FORM_ROUTE: &str = "navguard:sample_form";
pub const SAMPLE1_ROUTE: &str = "navguard:sample1";
pub const SAMPLE2_ROUTE: &str = "navguard:sample2";

/// Routes that never need a permission check when whitelist fallback is on.
pub const DEFAULT_WHITELIST: [&str; 3] = [PASSWORD_CHANGE_ROUTE, REGISTER_ROUTE, DEMO_CSS_ROUTE];

pub fn default_whitelist() -> Vec<String> {
    DEFAULT_WHITELIST.iter().map(|r| r.to_string()).collect()
}

/// The sidebar shown when no menu is configured.
pub fn default_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::tree(
            "Home",
            vec![
                MenuNode::link("Dashboard", HOME_ROUTE).with_icon("fa fa-dashboard"),
                MenuNode::link("Demo CSS", DEMO_CSS_ROUTE).with_icon("fa fa-file"),
            ],
        ),
        MenuNode::tree(
            "Profile",
            vec![MenuNode::link("Change Password", PASSWORD_CHANGE_ROUTE).with_icon("fa fa-lock")],
        ),
        MenuNode::tree(
            "Samples",
            vec![
                MenuNode::link("Sample Form", SAMPLE_FORM_ROUTE).with_icon("fa fa-list-alt"),
                MenuNode::link("Sample1", SAMPLE1_ROUTE).with_icon("fa fa-group"),
                MenuNode::tree(
                    "Sample Tree",
                    vec![MenuNode::link("Sample2", SAMPLE2_ROUTE).with_icon("fa fa-building")],
                )
                .with_icon("fa fa-leaf"),
            ],
        ),
    ]
}
