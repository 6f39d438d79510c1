//! # navguard-config
//!
//! TOML-driven settings for navguard sidebars.
//!
//! ## Overview
//!
//! [`SidebarSettings`] holds the whitelist, the whitelist-fallback flag, the
//! separator flag, and the three menu groups (`menu_first`, `menu`,
//! `menu_last`). Every field has a default, so an empty document yields the
//! built-in menu from [`defaults`].
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use navguard_config::SidebarSettings;
//!
//! let settings = SidebarSettings::from_file(Path::new("sidebar.toml"))?;
//! let policy = settings.access_policy();
//! ```

pub mod defaults;
pub mod settings;

pub use defaults::{default_menu, default_whitelist, DEFAULT_WHITELIST};
pub use settings::SidebarSettings;

// ── Tests ─────────────────────────────────────────────────────────────────────
