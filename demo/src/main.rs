//! navguard sidebar demo CLI
//!
//! Loads a TOML fixture holding sidebar settings plus the routes, view
//! permissions, and users the in-memory collaborators are built from, then
//! renders or checks the menu.
//!
//! Usage:
//!   cargo run -p demo -- render --user analyst --path /reports/
//!   cargo run -p demo -- render --user visitor --path / --visible-only
//!   cargo run -p demo -- check
//!   cargo run -p demo -- users

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use navguard_config::SidebarSettings;
use navguard_contracts::{
    error::{NavError, NavResult},
    render::{RenderedMenu, RenderedNode},
};
use navguard_core::{visible_only, MenuAccessResolver};
use navguard_memory::{HookRegistry, StaticRouter, StaticUser, ViewRegistry};

// ── CLI definition ────────────────────────────────────────────────────────────

/// navguard — permission-aware sidebar menus.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "navguard sidebar demo",
    long_about = "Renders a sidebar menu for a fixture user and request path,\n\
                  showing permission-based visibility and active-path highlighting."
)]
struct Cli {
    /// Fixture file with settings, routes, views, and users.
    #[arg(long, global = true, default_value = "demo/sidebar.toml")]
    fixture: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the menu as JSON for one user and request path.
    Render {
        /// Username from the fixture.
        #[arg(long)]
        user: String,
        /// Current request path.
        #[arg(long, default_value = "/")]
        path: String,
        /// Drop sections and nodes the user cannot see.
        #[arg(long)]
        visible_only: bool,
    },
    /// Render the full menu as a superuser to surface configuration errors.
    Check,
    /// List fixture users.
    Users,
}

// ── Fixture ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct Fixture {
    #[serde(flatten)]
    settings: SidebarSettings,
    #[serde(default)]
    routes: StaticRouter,
    #[serde(default)]
    views: ViewRegistry,
    #[serde(default)]
    users: Vec<StaticUser>,
}

impl Fixture {
    fn load(path: &Path) -> NavResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| NavError::Settings {
            reason: format!("failed to read fixture '{}': {}", path.display(), e),
        })?;
        let fixture: Self = toml::from_str(&contents).map_err(|e| NavError::Settings {
            reason: format!("failed to parse fixture '{}': {}", path.display(), e),
        })?;

        info!(
            fixture = %path.display(),
            routes = fixture.routes.routes().len(),
            views = fixture.views.len(),
            users = fixture.users.len(),
            "fixture loaded"
        );
        Ok(fixture)
    }

    fn user(&self, username: &str) -> NavResult<&StaticUser> {
        self.users
            .iter()
            .find(|u| u.username == username)
            .ok_or_else(|| NavError::Settings {
                reason: format!("no user named '{}' in fixture", username),
            })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = Fixture::load(&cli.fixture).and_then(|fixture| match cli.command {
        Command::Render { user, path, visible_only } => run_render(&fixture, &user, &path, visible_only),
        Command::Check => run_check(&fixture),
        Command::Users => {
            run_users(&fixture);
            Ok(())
        }
    });

    if let Err(e) = result {
        eprintln!("navguard error: {}", e);
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_render(fixture: &Fixture, username: &str, path: &str, prune: bool) -> NavResult<()> {
    let user = fixture.user(username)?;
    let menu = render(fixture, user, path)?;
    let menu = if prune { visible_only(menu) } else { menu };

    let json = serde_json::to_string_pretty(&menu).map_err(|e| NavError::Settings {
        reason: format!("failed to serialize rendered menu: {}", e),
    })?;
    println!("{}", json);
    Ok(())
}

fn run_check(fixture: &Fixture) -> NavResult<()> {
    let checker = StaticUser::superuser("navguard-check");
    let menu = render(fixture, &checker, "/")?;

    let links: usize = menu.sections.iter().map(|s| count_links(&s.nodes)).sum();
    println!(
        "menu OK: {} section(s), {} link(s), {} whitelisted route(s)",
        menu.sections.len(),
        links,
        fixture.settings.whitelist.len()
    );
    Ok(())
}

fn run_users(fixture: &Fixture) {
    for user in &fixture.users {
        let mut perms: Vec<&str> = user.permissions.iter().map(|p| p.as_str()).collect();
        perms.sort_unstable();
        let role = if user.is_superuser { " (superuser)" } else { "" };
        println!("{}{}: [{}]", user.username, role, perms.join(", "));
    }
}

fn render(fixture: &Fixture, user: &StaticUser, path: &str) -> NavResult<RenderedMenu> {
    let policy = fixture.settings.access_policy();
    let hooks = demo_hooks();
    let resolver = MenuAccessResolver::new(&policy, &fixture.routes, &fixture.views).with_hooks(&hooks);
    let sections = fixture.settings.sections();
    resolver.pass(user).render_menu(path, &sections)
}

/// Text hooks the fixture menu may name.
///
/// `badge` renders `"<label> (<args>)"`, taking the label and an optional
/// title from `hook_kwargs`.
fn demo_hooks() -> HookRegistry {
    HookRegistry::new().register("badge", |args, kwargs, _context| {
        let label = kwargs.get("label").map(String::as_str).unwrap_or("Items");
        let text = format!("{} ({})", label, args.join(", "));
        (text, kwargs.get("title").cloned())
    })
}

fn count_links(nodes: &[RenderedNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            RenderedNode::Tree { nodes, .. } => count_links(nodes),
            RenderedNode::Link { .. } => 1,
        })
        .sum()
}
