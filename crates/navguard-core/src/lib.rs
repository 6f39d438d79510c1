//! # navguard-core
//!
//! The menu access resolver for navguard sidebars.
//!
//! This crate provides:
//! - The three collaborator traits (`Router`, `PermissionStore`, `ViewMetadata`)
//!   plus the optional `TextHooks` used for computed link text
//! - `MenuAccessResolver` and `RenderPass`, which decide node visibility and
//!   active-path highlighting
//! - The renderer that turns a menu definition into a `RenderedMenu`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use navguard_core::{AccessPolicy, MenuAccessResolver};
//!
//! let resolver = MenuAccessResolver::new(&policy, &router, &views);
//! let pass = resolver.pass(&user);
//! let menu = pass.render_menu("/reports/", &sections)?;
//! ```

pub mod path;
pub mod render;
pub mod resolver;
pub mod traits;

pub use render::{visible_only, MenuGroups};
pub use resolver::{user_satisfies_all, user_satisfies_one, AccessPolicy, MenuAccessResolver, RenderPass};

// ── Tests ─────────────────────────────────────────────────────────────────────
