//! Route entries.
//!
//! A [`RouteEntry`] is what a registered pattern resolves to. It is bound
//! to exactly one [`RouteTarget`]: either a [`Handler`] callback or a
//! target tag of the caller's choosing (an enum of screens, a type name,
//! anything the caller can turn into a constructor later).

use crate::{Result, RouteParams, RouterError};
use std::fmt;
use std::sync::Arc;

/// Callback bound to a route. Receives the merged parameters and reports
/// whether it handled the URL.
pub type Handler = Arc<dyn Fn(&RouteParams) -> bool + Send + Sync>;

/// What a route is bound to.
pub enum RouteTarget<T> {
    /// Invoke this callback.
    Handler(Handler),
    /// Hand this tag to a construction or navigation collaborator.
    Target(T),
}

impl<T> RouteTarget<T> {
    /// Wrap a closure as a handler target.
    pub fn handler<F>(handler: F) -> Self
    where
        F: Fn(&RouteParams) -> bool + Send + Sync + 'static,
    {
        RouteTarget::Handler(Arc::new(handler))
    }
}

impl<T: Clone> Clone for RouteTarget<T> {
    fn clone(&self) -> Self {
        match self {
            RouteTarget::Handler(h) => RouteTarget::Handler(Arc::clone(h)),
            RouteTarget::Target(t) => RouteTarget::Target(t.clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RouteTarget<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTarget::Handler(_) => f.write_str("Handler(<fn>)"),
            RouteTarget::Target(t) => f.debug_tuple("Target").field(t).finish(),
        }
    }
}

/// The value stored at a terminal trie node.
pub struct RouteEntry<T> {
    pattern: String,
    target: RouteTarget<T>,
}

impl<T> RouteEntry<T> {
    /// Create an entry for `pattern`.
    pub fn new(pattern: impl Into<String>, target: RouteTarget<T>) -> Self {
        Self {
            pattern: pattern.into(),
            target,
        }
    }

    /// Assemble an entry from optional parts.
    ///
    /// Exactly one of `handler` and `target` must be present; otherwise
    /// [`RouterError::InvalidRouteEntry`] is returned.
    ///
    /// ```
    /// use url_navigator::{RouteEntry, RouterError};
    ///
    /// let entry = RouteEntry::from_parts("/about", None, Some("About")).unwrap();
    /// assert_eq!(entry.target(), Some(&"About"));
    ///
    /// let err = RouteEntry::<&str>::from_parts("/about", None, None).unwrap_err();
    /// assert!(matches!(err, RouterError::InvalidRouteEntry { .. }));
    /// ```
    pub fn from_parts(
        pattern: impl Into<String>,
        handler: Option<Handler>,
        target: Option<T>,
    ) -> Result<Self> {
        let pattern = pattern.into();
        let target = match (handler, target) {
            (Some(handler), None) => RouteTarget::Handler(handler),
            (None, Some(target)) => RouteTarget::Target(target),
            _ => return Err(RouterError::InvalidRouteEntry { pattern }),
        };
        Ok(Self { pattern, target })
    }

    /// The pattern this entry was registered under.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// What the entry is bound to.
    pub fn route_target(&self) -> &RouteTarget<T> {
        &self.target
    }

    /// The handler, if this is a handler route.
    pub fn handler(&self) -> Option<&Handler> {
        match &self.target {
            RouteTarget::Handler(h) => Some(h),
            RouteTarget::Target(_) => None,
        }
    }

    /// The target tag, if this is a target route.
    pub fn target(&self) -> Option<&T> {
        match &self.target {
            RouteTarget::Target(t) => Some(t),
            RouteTarget::Handler(_) => None,
        }
    }

    /// Check if this entry is bound to a handler.
    pub fn is_handler(&self) -> bool {
        matches!(self.target, RouteTarget::Handler(_))
    }
}

impl<T: fmt::Debug> fmt::Debug for RouteEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("pattern", &self.pattern)
            .field("target", &self.target)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Display for RouteEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            RouteTarget::Handler(_) => write!(f, "{} -> <handler>", self.pattern),
            RouteTarget::Target(t) => write!(f, "{} -> {:?}", self.pattern, t),
        }
    }
}
