//! In-memory implementation of `Router`.
//!
//! Routes are registered as URL patterns where each `{}` is filled by one
//! positional argument and each `{name}` by the keyword argument `name`.
//! Resolution matches a concrete URL back to the view of the first pattern
//! that fits it segment by segment.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use navguard_contracts::permission::ViewId;
use navguard_core::{path::strip_fragment, traits::Router};

/// One named route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Route name used by menu nodes, e.g. `"reports:detail"`.
    pub name: String,
    /// URL pattern, e.g. `"/reports/{}/"` or `"/reports/{slug}/"`.
    pub pattern: String,
    /// The view bound to this route.
    pub view: String,
}

/// A fixed routing table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticRouter {
    routes: Vec<RouteEntry>,
}

impl StaticRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `pattern` under `name`, bound to `view`.
    pub fn route(mut self, name: impl Into<String>, pattern: impl Into<String>, view: impl Into<String>) -> Self {
        self.routes.push(RouteEntry {
            name: name.into(),
            pattern: pattern.into(),
            view: view.into(),
        });
        self
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }
}

/// Fill the slots of `pattern` from `args` and `kwargs`.
///
/// Returns `None` unless every slot is filled and every argument is used.
fn fill_pattern(pattern: &str, args: &[String], kwargs: &BTreeMap<String, String>) -> Option<String> {
    let mut url = String::with_capacity(pattern.len());
    let mut positional = args.iter();
    let mut used = BTreeSet::new();
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        let close = open + rest[open..].find('}')?;
        url.push_str(&rest[..open]);

        let name = &rest[open + 1..close];
        if name.is_empty() {
            url.push_str(positional.next()?);
        } else {
            url.push_str(kwargs.get(name)?);
            used.insert(name);
        }
        rest = &rest[close + 1..];
    }
    url.push_str(rest);

    let all_used = positional.next().is_none() && used.len() == kwargs.len();
    all_used.then_some(url)
}

fn is_slot(segment: &str) -> bool {
    segment.len() >= 2 && segment.starts_with('{') && segment.ends_with('}')
}

/// Return true if `url` fits `pattern`, with each `{}` or `{name}` standing
/// for one non-empty path segment.
fn pattern_matches(pattern: &str, url: &str) -> bool {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let url_segments: Vec<&str> = url.split('/').collect();

    pattern_segments.len() == url_segments.len()
        && pattern_segments
            .iter()
            .zip(&url_segments)
            .all(|(p, u)| if is_slot(p) { !u.is_empty() } else { p == u })
}

impl Router for StaticRouter {
    fn reverse(&self, route: &str, args: &[String], kwargs: &BTreeMap<String, String>) -> Option<String> {
        self.routes
            .iter()
            .filter(|entry| entry.name == route)
            .find_map(|entry| fill_pattern(&entry.pattern, args, kwargs))
    }

    fn resolve(&self, url: &str) -> Option<ViewId> {
        let url = strip_fragment(url);
        let path = url.split('?').next().unwrap_or(url);

        let view = self
            .routes
            .iter()
            .find(|entry| pattern_matches(&entry.pattern, path))
            .map(|entry| ViewId::new(entry.view.clone()));

        debug!(url = %path, view = ?view, "router resolve");
        view
    }
}
