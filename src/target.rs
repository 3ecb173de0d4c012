//! Construction and navigation collaborators.
//!
//! The router never builds screens or touches a navigation stack. When a
//! URL resolves to a target, the tag and the captured parameters are handed
//! to one of two caller-supplied collaborators:
//!
//! - a [`TargetFactory`] turns the tag into a value (usually via a
//!   [`TargetRegistry`] of constructors),
//! - a [`Navigate`] implementation shows whatever the tag stands for.
//!
//! Values that want the parameters applied field by field implement
//! [`Routable`].
//!
//! # Example
//!
//! ```
//! use url_navigator::{Routable, Router, TargetRegistry};
//!
//! #[derive(Debug, Default)]
//! struct UserScreen {
//!     user_id: Option<String>,
//! }
//!
//! impl Routable for UserScreen {
//!     fn set_param(&mut self, key: &str, value: &str) {
//!         if key == "userId" {
//!             self.user_id = Some(value.to_string());
//!         }
//!     }
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum Screen {
//!     User,
//! }
//!
//! let mut router = Router::with_config(Default::default());
//! router.map_target("/user/:userId", Screen::User).unwrap();
//!
//! let mut registry: TargetRegistry<Screen, UserScreen> = TargetRegistry::new();
//! registry.register_routable::<UserScreen>(Screen::User);
//!
//! let screen = router.instantiate("/user/42", &registry).unwrap();
//! assert_eq!(screen.user_id.as_deref(), Some("42"));
//! ```

use crate::RouteParams;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Default target tag: a plain name.
///
/// Use your own `enum` as the router's target type when the set of screens
/// is known at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(Cow<'static, str>);

impl TargetId {
    /// Create a tag from a static name without allocating.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The tag's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TargetId {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for TargetId {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value built from route parameters by key/value assignment.
///
/// `set_param` is called once per parameter, in arbitrary order. Keys the
/// type doesn't know should be ignored.
pub trait Routable: Default {
    /// Assign one parameter.
    fn set_param(&mut self, key: &str, value: &str);

    /// Build a default value and assign every parameter to it.
    fn from_params(params: &RouteParams) -> Self {
        let mut value = Self::default();
        for (key, value_str) in params.iter() {
            value.set_param(key, value_str);
        }
        value
    }
}

/// Turns a matched target tag into a value.
pub trait TargetFactory<T> {
    /// What the factory builds.
    type Output;

    /// Build the value for `target`, or `None` if the tag is unknown.
    fn construct(&self, target: &T, params: &RouteParams) -> Option<Self::Output>;
}

/// Shows the screen a target tag stands for.
///
/// Returns whether navigation happened. Closures of the right shape
/// implement this trait.
pub trait Navigate<T> {
    /// Navigate to `target` with the merged parameters.
    fn navigate(&mut self, target: &T, params: &RouteParams) -> bool;
}

impl<T, F> Navigate<T> for F
where
    F: FnMut(&T, &RouteParams) -> bool,
{
    fn navigate(&mut self, target: &T, params: &RouteParams) -> bool {
        self(target, params)
    }
}

type Constructor<O> = Arc<dyn Fn(&RouteParams) -> O + Send + Sync>;

/// Lookup table from target tag to constructor.
pub struct TargetRegistry<T, O> {
    constructors: HashMap<T, Constructor<O>>,
}

impl<T, O> TargetRegistry<T, O>
where
    T: Eq + Hash,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register a constructor for `target`, replacing any previous one.
    pub fn register<F>(&mut self, target: T, constructor: F) -> &mut Self
    where
        F: Fn(&RouteParams) -> O + Send + Sync + 'static,
    {
        self.constructors.insert(target, Arc::new(constructor));
        self
    }

    /// Register `R::from_params` (converted into `O`) for `target`.
    pub fn register_routable<R>(&mut self, target: T) -> &mut Self
    where
        R: Routable + Into<O> + 'static,
        T: 'static,
        O: 'static,
    {
        self.register(target, |params| R::from_params(params).into())
    }

    /// Check if `target` has a constructor.
    pub fn contains(&self, target: &T) -> bool {
        self.constructors.contains_key(target)
    }

    /// Number of registered constructors.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Return `true` if no constructor is registered.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<T: Eq + Hash, O> Default for TargetRegistry<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, O> fmt::Debug for TargetRegistry<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetRegistry")
            .field("targets", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<T, O> TargetFactory<T> for TargetRegistry<T, O>
where
    T: Eq + Hash,
{
    type Output = O;

    fn construct(&self, target: &T, params: &RouteParams) -> Option<O> {
        self.constructors.get(target).map(|ctor| ctor(params))
    }
}
