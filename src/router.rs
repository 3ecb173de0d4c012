//! The router facade.
//!
//! [`Router`] owns one route table and ties the pieces together:
//!
//! ```text
//! map(pattern, target)   strip scheme → parse pattern → trie insert
//! match_url(url)         strip scheme → split path/query → trie lookup
//!                        → parse query → overlay on path params
//! dispatch(url, nav)     match_url → handler(params) or nav.navigate(tag, params)
//! ```
//!
//! A router is an ordinary value: create as many as you need (one per
//! process, one per test). It is not internally synchronized; wrap it in a
//! lock if several threads register and match concurrently.
//!
//! # Example
//!
//! ```
//! use url_navigator::{Router, RouterConfig};
//!
//! let mut router: Router = Router::with_config(RouterConfig::new().scheme("myapp"));
//! router.map_target("/about", "About".into()).unwrap();
//! router.map_target("/user/:userId", "User".into()).unwrap();
//! router
//!     .map_handler("/user/add", |params| params.contains("username"))
//!     .unwrap();
//!
//! let matched = router.match_url("myapp://user/1?tab=posts").unwrap().unwrap();
//! assert_eq!(matched.pattern(), "/user/:userId");
//! assert_eq!(matched.params.get("userId"), Some("1"));
//! assert_eq!(matched.params.get("tab"), Some("posts"));
//!
//! assert!(router.dispatch_handler("/user/add?username=hello").unwrap());
//! assert!(router.match_url("/missing").unwrap().is_none());
//! ```

#[cfg(feature = "middleware")]
use crate::middleware::{DispatchMiddleware, DispatchRequest, MiddlewareChain};
use crate::path::{parse_url, strip_scheme};
use crate::query::parse_query;
use crate::trie::RouteTrie;
use crate::{
    debug_log, info_log, warn_log, Handler, Navigate, Result, RouteEntry, RouteParams,
    RoutePattern, RouteTarget, RouterConfig, RouterError, TargetFactory, TargetId,
};
use std::fmt;
#[cfg(feature = "middleware")]
use std::sync::Arc;

/// A successful match: the entry and the merged parameters.
pub struct RouteMatch<'a, T> {
    /// The matched entry, borrowed from the route table.
    pub entry: &'a RouteEntry<T>,
    /// Path parameters with query parameters laid over them.
    pub params: RouteParams,
}

impl<'a, T> RouteMatch<'a, T> {
    /// The pattern that matched.
    pub fn pattern(&self) -> &'a str {
        self.entry.pattern()
    }

    /// The handler, if the entry is a handler route.
    pub fn handler(&self) -> Option<&'a Handler> {
        self.entry.handler()
    }

    /// The target tag, if the entry is a target route.
    pub fn target(&self) -> Option<&'a T> {
        self.entry.target()
    }
}

impl<T> Clone for RouteMatch<'_, T> {
    fn clone(&self) -> Self {
        Self {
            entry: self.entry,
            params: self.params.clone(),
        }
    }
}

impl<T> PartialEq for RouteMatch<'_, T> {
    /// Two matches are equal if they point at the same entry with equal
    /// parameters.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.entry, other.entry) && self.params == other.params
    }
}

impl<T: fmt::Debug> fmt::Debug for RouteMatch<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("entry", self.entry)
            .field("params", &self.params)
            .finish()
    }
}

/// A handler route resolved for a URL.
pub type ResolvedHandler<'a> = (&'a Handler, RouteParams);

/// A target route resolved for a URL.
pub type ResolvedTarget<'a, T> = (&'a T, RouteParams);

/// Maps route patterns to handlers or target tags and resolves URLs.
pub struct Router<T = TargetId> {
    config: RouterConfig,
    table: RouteTrie<T>,
    patterns: Vec<String>,
    #[cfg(feature = "middleware")]
    middleware: MiddlewareChain,
}

impl Router<TargetId> {
    /// Create a permissive router with [`TargetId`] tags.
    ///
    /// Use [`with_config`](Router::with_config) for other tag types.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }
}

impl<T> Router<T> {
    /// Create an empty router with `config`.
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            config,
            table: RouteTrie::new(),
            patterns: Vec::new(),
            #[cfg(feature = "middleware")]
            middleware: MiddlewareChain::default(),
        }
    }

    /// The router's configuration.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register `pattern` against `target`.
    ///
    /// The pattern may carry a recognized scheme and a query suffix; both
    /// are ignored. Fails with [`RouterError::InvalidPattern`] for patterns
    /// without segments or with malformed parameters, and with
    /// [`RouterError::DuplicateRoute`] if the exact pattern path is already
    /// registered. A failed registration leaves the table unchanged.
    pub fn map(&mut self, pattern: &str, target: RouteTarget<T>) -> Result<()> {
        let (_, path) = strip_scheme(pattern, &self.config);
        let parsed = RoutePattern::parse_path(pattern, path).map_err(|err| {
            warn_log!("Rejected route: {}", err);
            err
        })?;

        let kind = match target {
            RouteTarget::Handler(_) => "handler",
            RouteTarget::Target(_) => "target",
        };
        match self
            .table
            .insert(parsed.segments(), RouteEntry::new(pattern, target))
        {
            Ok(_) => {
                info_log!("Registered route '{}' ({})", pattern, kind);
                self.patterns.push(pattern.to_string());
                Ok(())
            }
            Err(err) => {
                warn_log!("Rejected route: {}", err);
                Err(err)
            }
        }
    }

    /// Register `pattern` against a target tag.
    pub fn map_target(&mut self, pattern: &str, target: T) -> Result<()> {
        self.map(pattern, RouteTarget::Target(target))
    }

    /// Register `pattern` against a handler callback.
    pub fn map_handler<F>(&mut self, pattern: &str, handler: F) -> Result<()>
    where
        F: Fn(&RouteParams) -> bool + Send + Sync + 'static,
    {
        self.map(pattern, RouteTarget::handler(handler))
    }

    /// Drop every registered route.
    pub fn remove_all_routes(&mut self) {
        let count = self.table.len();
        self.table.clear();
        self.patterns.clear();
        info_log!("Removed all routes ({} dropped)", count);
    }

    /// Attach dispatch middleware.
    #[cfg(feature = "middleware")]
    pub fn add_middleware<M: DispatchMiddleware>(&mut self, middleware: M) -> &mut Self {
        debug_log!("Added dispatch middleware '{}'", middleware.name());
        self.middleware.push(Arc::new(middleware));
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Return `true` if no route is registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Registered patterns, in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    /// Check if a pattern with the same structure is registered.
    ///
    /// Parameter names count: `/user/:id` does not contain `/user/:name`.
    pub fn contains_pattern(&self, pattern: &str) -> bool {
        let (_, path) = strip_scheme(pattern, &self.config);
        RoutePattern::parse_path(pattern, path)
            .map(|parsed| self.table.find(parsed.segments()).is_some())
            .unwrap_or(false)
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Resolve `url` against the route table.
    ///
    /// Returns `Ok(None)` if nothing matches. The only error is
    /// [`RouterError::SchemeNotRecognized`], in strict mode.
    pub fn match_url(&self, url: &str) -> Result<Option<RouteMatch<'_, T>>> {
        let parsed = parse_url(url, &self.config);
        if self.config.is_strict() && parsed.scheme.is_none() {
            warn_log!("Rejected '{}': no recognized scheme", url);
            return Err(RouterError::SchemeNotRecognized {
                url: url.to_string(),
            });
        }

        let Some((entry, mut params)) = self.table.lookup(&parsed.segments) else {
            debug_log!("No route matched '{}'", url);
            return Ok(None);
        };
        if let Some(query) = parsed.query {
            params.overlay(parse_query(query, self.config.decodes_query()));
        }

        debug_log!("'{}' matched route '{}'", url, entry.pattern());
        Ok(Some(RouteMatch { entry, params }))
    }

    /// Like [`match_url`](Self::match_url) but an unmatched URL is
    /// [`RouterError::NoMatch`].
    pub fn require_match(&self, url: &str) -> Result<RouteMatch<'_, T>> {
        self.match_url(url)?.ok_or_else(|| RouterError::NoMatch {
            url: url.to_string(),
        })
    }

    /// Resolve `url` to a handler route.
    pub fn resolve_handler(&self, url: &str) -> Result<ResolvedHandler<'_>> {
        let matched = self.require_match(url)?;
        match matched.handler() {
            Some(handler) => Ok((handler, matched.params)),
            None => Err(RouterError::NotAHandlerRoute {
                pattern: matched.pattern().to_string(),
            }),
        }
    }

    /// Resolve `url` to a target route.
    ///
    /// Building anything from the tag is up to the caller; see
    /// [`instantiate`](Self::instantiate).
    pub fn resolve_target(&self, url: &str) -> Result<ResolvedTarget<'_, T>> {
        let matched = self.require_match(url)?;
        match matched.target() {
            Some(target) => Ok((target, matched.params)),
            None => Err(RouterError::NotATargetRoute {
                pattern: matched.pattern().to_string(),
            }),
        }
    }

    /// Resolve `url` to a target route and build it with `factory`.
    ///
    /// Fails with [`RouterError::TargetNotConstructible`] if the factory
    /// has no constructor for the matched tag.
    pub fn instantiate<F>(&self, url: &str, factory: &F) -> Result<F::Output>
    where
        F: TargetFactory<T>,
    {
        let matched = self.require_match(url)?;
        let Some(target) = matched.target() else {
            return Err(RouterError::NotATargetRoute {
                pattern: matched.pattern().to_string(),
            });
        };
        factory
            .construct(target, &matched.params)
            .ok_or_else(|| RouterError::TargetNotConstructible {
                pattern: matched.pattern().to_string(),
            })
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Match `url` and act on it.
    ///
    /// A handler route calls the handler with the merged parameters; a
    /// target route hands tag and parameters to `navigator`. Returns what
    /// the handler or navigator returned. Fails with
    /// [`RouterError::NoMatch`] if nothing matches.
    pub fn dispatch<N>(&self, url: &str, navigator: &mut N) -> Result<bool>
    where
        N: Navigate<T>,
    {
        let matched = self.require_match(url)?;
        let handled = self.around_dispatch(url, &matched, || match matched.entry.route_target() {
            RouteTarget::Handler(handler) => {
                debug_log!("Invoking handler of '{}'", matched.pattern());
                handler(&matched.params)
            }
            RouteTarget::Target(target) => {
                debug_log!("Navigating to target of '{}'", matched.pattern());
                navigator.navigate(target, &matched.params)
            }
        });
        Ok(handled)
    }

    /// Match `url` and invoke its handler.
    ///
    /// Fails with [`RouterError::NotAHandlerRoute`] if the URL resolves to a
    /// target route.
    pub fn dispatch_handler(&self, url: &str) -> Result<bool> {
        let matched = self.require_match(url)?;
        let Some(handler) = matched.handler() else {
            return Err(RouterError::NotAHandlerRoute {
                pattern: matched.pattern().to_string(),
            });
        };
        debug_log!("Invoking handler of '{}'", matched.pattern());
        Ok(self.around_dispatch(url, &matched, || handler(&matched.params)))
    }

    #[cfg_attr(not(feature = "middleware"), allow(unused_variables))]
    fn around_dispatch(
        &self,
        url: &str,
        matched: &RouteMatch<'_, T>,
        run: impl FnOnce() -> bool,
    ) -> bool {
        #[cfg(feature = "middleware")]
        let request = DispatchRequest::new(url, matched.pattern(), matched.params.clone());
        #[cfg(feature = "middleware")]
        self.middleware.run_before(&request);

        let handled = run();

        #[cfg(feature = "middleware")]
        self.middleware.run_after(&request, handled);
        handled
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::with_config(RouterConfig::default())
    }
}

impl<T> fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Router");
        s.field("config", &self.config).field("patterns", &self.patterns);
        #[cfg(feature = "middleware")]
        s.field("middleware", &self.middleware);
        s.finish()
    }
}
