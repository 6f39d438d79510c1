//! In-memory implementation of `TextHooks`.
//!
//! Hooks are plain closures registered under a name at setup; menu nodes
//! refer to them by that name.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::debug;

use navguard_core::traits::{HookContext, TextHooks};

type HookFn = dyn Fn(&[String], &BTreeMap<String, String>, &HookContext<'_>) -> (String, Option<String>)
    + Send
    + Sync;

/// A fixed table of named text hooks.
#[derive(Default)]
pub struct HookRegistry {
    hooks: HashMap<String, Box<HookFn>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `hook` under `name`. It returns the link text and, optionally,
    /// a separate title.
    pub fn register<F>(mut self, name: impl Into<String>, hook: F) -> Self
    where
        F: Fn(&[String], &BTreeMap<String, String>, &HookContext<'_>) -> (String, Option<String>)
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        debug!(hook = %name, "text hook registered");
        self.hooks.insert(name, Box::new(hook));
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.hooks.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("HookRegistry").field("hooks", &names).finish()
    }
}

impl TextHooks for HookRegistry {
    fn call(
        &self,
        hook: &str,
        args: &[String],
        kwargs: &BTreeMap<String, String>,
        context: &HookContext<'_>,
    ) -> Option<(String, Option<String>)> {
        self.hooks.get(hook).map(|f| f(args, kwargs, context))
    }
}
