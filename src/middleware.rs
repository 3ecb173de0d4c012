//! Dispatch middleware.
//!
//! Middleware observes [`Router::dispatch`](crate::Router::dispatch) and
//! [`Router::dispatch_handler`](crate::Router::dispatch_handler) calls that
//! matched a route: logging, analytics, timing. It runs synchronously on the
//! dispatching thread and cannot change the outcome.
//!
//! # Execution order
//!
//! `before_dispatch` runs in **priority order** (higher first) and
//! `after_dispatch` in reverse (onion model). Unmatched URLs and kind
//! errors never reach middleware.
//!
//! # Example
//!
//! ```
//! use url_navigator::{middleware_fn, DispatchMiddleware, DispatchRequest, RouteParams};
//!
//! let mw = middleware_fn(
//!     |request: &DispatchRequest| println!("opening {}", request.url),
//!     |request: &DispatchRequest, handled: bool| {
//!         println!("{} handled: {}", request.pattern, handled)
//!     },
//! );
//! let request = DispatchRequest::new("/about", "/about", RouteParams::new());
//! mw.before_dispatch(&request);
//! mw.after_dispatch(&request, true);
//! ```

use crate::{trace_log, RouteParams};
use std::fmt;
use std::sync::Arc;

/// A matched URL about to be dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    /// The URL as passed to the router.
    pub url: String,
    /// The pattern it matched.
    pub pattern: String,
    /// Merged path and query parameters.
    pub params: RouteParams,
}

impl DispatchRequest {
    /// Create a request.
    pub fn new(url: impl Into<String>, pattern: impl Into<String>, params: RouteParams) -> Self {
        Self {
            url: url.into(),
            pattern: pattern.into(),
            params,
        }
    }
}

/// Hooks run around dispatch of a matched route.
pub trait DispatchMiddleware: Send + Sync + 'static {
    /// Called before the handler or navigator runs.
    fn before_dispatch(&self, request: &DispatchRequest);

    /// Called after it returned, with its result.
    fn after_dispatch(&self, request: &DispatchRequest, handled: bool);

    /// Middleware name for debugging.
    fn name(&self) -> &'static str {
        "DispatchMiddleware"
    }

    /// Middleware priority (higher runs first for `before`, last for `after`).
    fn priority(&self) -> i32 {
        0
    }
}

/// Create middleware from two closures (before and after).
pub const fn middleware_fn<B, A>(before: B, after: A) -> FnMiddleware<B, A>
where
    B: Fn(&DispatchRequest) + Send + Sync + 'static,
    A: Fn(&DispatchRequest, bool) + Send + Sync + 'static,
{
    FnMiddleware { before, after }
}

/// Middleware created from two closures via [`middleware_fn`].
pub struct FnMiddleware<B, A> {
    before: B,
    after: A,
}

impl<B, A> DispatchMiddleware for FnMiddleware<B, A>
where
    B: Fn(&DispatchRequest) + Send + Sync + 'static,
    A: Fn(&DispatchRequest, bool) + Send + Sync + 'static,
{
    fn before_dispatch(&self, request: &DispatchRequest) {
        (self.before)(request);
    }

    fn after_dispatch(&self, request: &DispatchRequest, handled: bool) {
        (self.after)(request, handled);
    }
}

/// Priority-ordered middleware list owned by the router.
#[derive(Default)]
pub(crate) struct MiddlewareChain {
    middleware: Vec<Arc<dyn DispatchMiddleware>>,
}

impl MiddlewareChain {
    pub(crate) fn push(&mut self, middleware: Arc<dyn DispatchMiddleware>) {
        self.middleware.push(middleware);
        // stable: equal priorities keep insertion order
        self.middleware.sort_by_key(|m| std::cmp::Reverse(m.priority()));
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.middleware.len()
    }

    pub(crate) fn run_before(&self, request: &DispatchRequest) {
        for m in &self.middleware {
            trace_log!("Running before_dispatch of '{}'", m.name());
            m.before_dispatch(request);
        }
    }

    pub(crate) fn run_after(&self, request: &DispatchRequest, handled: bool) {
        for m in self.middleware.iter().rev() {
            trace_log!("Running after_dispatch of '{}'", m.name());
            m.after_dispatch(request, handled);
        }
    }
}

impl fmt::Debug for MiddlewareChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.middleware.iter().map(|m| m.name()))
            .finish()
    }
}
