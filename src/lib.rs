//! # URL Navigator
//!
//! A client-side URL router. Route patterns such as `/user/:userId` are
//! mapped to either a handler callback or a target tag; concrete URLs are
//! resolved against the table, with path and query parameters extracted
//! into one flat map.
//!
//! - **Segment trie** - literal segments beat `:param` segments at every
//!   level; see [`trie`] for the exact matching rules.
//! - **Scheme stripping** - `myapp://user/1` and `/user/1` resolve the same
//!   once `myapp` is configured.
//! - **Query merge** - `?key=value` pairs are laid over path parameters.
//! - **Collaborators** - the router hands target tags to a
//!   [`TargetFactory`] or a [`Navigate`] implementation and never builds or
//!   presents anything itself.
//!
//! # Quick Start
//!
//! ```
//! use url_navigator::{Router, RouteParams};
//!
//! let mut router = Router::new();
//! router.map_target("/about", "About".into()).unwrap();
//! router.map_target("/user/:userId", "User".into()).unwrap();
//! router
//!     .map_handler("/user/add", |params: &RouteParams| {
//!         params.get("username") == Some("hello")
//!     })
//!     .unwrap();
//!
//! let (target, params) = router.resolve_target("/user/1?username=hello").unwrap();
//! assert_eq!(target.as_str(), "User");
//! assert_eq!(params.get("userId"), Some("1"));
//! assert_eq!(params.get("username"), Some("hello"));
//!
//! assert!(router.dispatch_handler("/user/add?username=hello").unwrap());
//! ```
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the standard `log` crate for logging
//! - `tracing` - Uses the `tracing` crate for structured logging (mutually exclusive with `log`)
//! - `middleware` (default) - Dispatch middleware hooks

#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Configuration and errors
pub mod config;
pub mod error;

// Parsing
pub mod params;
pub mod path;
pub mod pattern;
pub mod query;

// Route table
pub mod entry;
pub mod trie;

// Collaborators
#[cfg(feature = "middleware")]
pub mod middleware;
pub mod target;

// Facade
mod router;

pub use config::RouterConfig;
pub use entry::{Handler, RouteEntry, RouteTarget};
pub use error::{Result, RouterError};
#[cfg(feature = "middleware")]
pub use middleware::{middleware_fn, DispatchMiddleware, DispatchRequest, FnMiddleware};
pub use params::RouteParams;
pub use pattern::{RoutePattern, Segment};
pub use router::{ResolvedHandler, ResolvedTarget, RouteMatch, Router};
pub use target::{Navigate, Routable, TargetFactory, TargetId, TargetRegistry};
pub use trie::RouteTrie;
