//! Error handling for the router.
//!
//! Every fallible router operation returns [`RouterError`]. The variants
//! fall into three groups:
//!
//! - **Registration errors** - [`InvalidPattern`](RouterError::InvalidPattern),
//!   [`DuplicateRoute`](RouterError::DuplicateRoute) and
//!   [`InvalidRouteEntry`](RouterError::InvalidRouteEntry). These point at a
//!   misconfigured route table and are returned from `map`.
//! - **Resolution errors** - [`NoMatch`](RouterError::NoMatch) and
//!   [`SchemeNotRecognized`](RouterError::SchemeNotRecognized).
//! - **Kind errors** - the route exists but is the wrong kind for the call
//!   ([`NotAHandlerRoute`](RouterError::NotAHandlerRoute),
//!   [`NotATargetRoute`](RouterError::NotATargetRoute),
//!   [`TargetNotConstructible`](RouterError::TargetNotConstructible)).
//!
//! [`Router::match_url`](crate::Router::match_url) does not use `NoMatch`:
//! an unmatched URL comes back as `Ok(None)`. Only the convenience calls
//! that must produce something turn it into an error.
//!
//! # Examples
//!
//! ```
//! use url_navigator::RouterError;
//!
//! let err = RouterError::DuplicateRoute { pattern: "/a/b".into() };
//! assert!(err.is_registration_error());
//! assert_eq!(err.to_string(), "Route already registered: /a/b");
//! ```

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T, E = RouterError> = std::result::Result<T, E>;

/// Errors returned by router operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// The registration pattern is empty or malformed.
    InvalidPattern { pattern: String, reason: String },

    /// The exact segment path is already bound to an entry.
    DuplicateRoute { pattern: String },

    /// An entry was assembled with both or neither of handler and target.
    InvalidRouteEntry { pattern: String },

    /// A well-formed URL matched no registered route.
    NoMatch { url: String },

    /// Strict scheme checking is on and the URL carries no recognized scheme.
    SchemeNotRecognized { url: String },

    /// The matched route is bound to a target, not a handler.
    NotAHandlerRoute { pattern: String },

    /// The matched route is bound to a handler, not a target.
    NotATargetRoute { pattern: String },

    /// The construction collaborator has no constructor for the target.
    TargetNotConstructible { pattern: String },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid route pattern '{}': {}", pattern, reason)
            }
            RouterError::DuplicateRoute { pattern } => {
                write!(f, "Route already registered: {}", pattern)
            }
            RouterError::InvalidRouteEntry { pattern } => {
                write!(
                    f,
                    "Route entry for '{}' must have exactly one of handler or target",
                    pattern
                )
            }
            RouterError::NoMatch { url } => write!(f, "No route matches: {}", url),
            RouterError::SchemeNotRecognized { url } => {
                write!(f, "URL scheme not recognized: {}", url)
            }
            RouterError::NotAHandlerRoute { pattern } => {
                write!(f, "Route '{}' is not bound to a handler", pattern)
            }
            RouterError::NotATargetRoute { pattern } => {
                write!(f, "Route '{}' is not bound to a target", pattern)
            }
            RouterError::TargetNotConstructible { pattern } => {
                write!(f, "No constructor for the target of route '{}'", pattern)
            }
        }
    }
}

impl std::error::Error for RouterError {}

impl RouterError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error was raised while registering a route.
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            RouterError::InvalidPattern { .. }
                | RouterError::DuplicateRoute { .. }
                | RouterError::InvalidRouteEntry { .. }
        )
    }

    /// Check if this error means nothing matched.
    pub fn is_no_match(&self) -> bool {
        matches!(self, RouterError::NoMatch { .. })
    }

    /// Check if a route matched but had the wrong kind for the call.
    pub fn is_wrong_kind(&self) -> bool {
        matches!(
            self,
            RouterError::NotAHandlerRoute { .. }
                | RouterError::NotATargetRoute { .. }
                | RouterError::TargetNotConstructible { .. }
        )
    }
}
