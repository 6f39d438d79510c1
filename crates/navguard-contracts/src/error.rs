//! Error types for menu resolution and rendering.
//!
//! Every fallible operation in navguard returns `NavResult<T>`. Permission
//! checks themselves never fail; only a malformed menu, an unknown route, or
//! unreadable settings produce an error. Messages carry the offending node's
//! text or route so a misconfigured menu can be fixed without a debugger.

use thiserror::Error;

/// Guidance appended to every node-level error message.
const PLACEHOLDER_HINT: &str = "If you do not have a valid route yet you can use '#' as a placeholder. \
     If whitelisting is turned on, be sure to add an entry for '#' to the whitelist.";

/// The unified error type for navguard.
#[derive(Debug, Error)]
pub enum NavError {
    /// A menu node has no destination: neither `route` nor `url` is set.
    #[error("the '{key}' key must be provided for menu node '{text}'. {hint}", hint = PLACEHOLDER_HINT)]
    Configuration { text: String, key: String },

    /// A node's route could not be reversed by the router.
    #[error("the node with the route '{route}' is not a valid route. {hint} Reason: {reason}", hint = PLACEHOLDER_HINT)]
    Routing { route: String, reason: String },

    /// A link names a text hook that is not registered.
    #[error("menu node '{text}' uses the text hook '{hook}', which is not registered")]
    Hook { text: String, hook: String },

    /// Settings or fixture data could not be read or parsed.
    #[error("settings error: {reason}")]
    Settings { reason: String },
}

/// Convenience alias used throughout the navguard crates.
pub type NavResult<T> = Result<T, NavError>;
