//! # navguard-memory
//!
//! In-memory reference implementations of the navguard collaborator traits.
//!
//! ## Overview
//!
//! - [`StaticRouter`] implements `Router` over a fixed table of URL patterns.
//! - [`ViewRegistry`] implements `ViewMetadata`; views register their
//!   permission descriptors explicitly at setup.
//! - [`StaticUser`] implements `PermissionStore` over a fixed permission set.
//! - [`HookRegistry`] implements `TextHooks` over named closures.
//!
//! Hosts embedding navguard in a real web stack implement the traits over
//! their own router and user model; these types serve tests, fixtures, and
//! the demo CLI.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use navguard_memory::{StaticRouter, StaticUser, ViewRegistry};
//!
//! let router = StaticRouter::new().route("reports:list", "/reports/", "reports_list");
//! let views = ViewRegistry::new().requires_one("reports_list", ["reports.view_report"]);
//! let user = StaticUser::new("alice").with_permissions(["reports.view_report"]);
//! ```

pub mod hooks;
pub mod router;
pub mod user;
pub mod views;

pub use hooks::HookRegistry;
pub use router::{RouteEntry, StaticRouter};
pub use user::StaticUser;
pub use views::ViewRegistry;

// ── Tests ─────────────────────────────────────────────────────────────────────
