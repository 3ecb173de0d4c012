//! Captured route parameters.
//!
//! [`RouteParams`] is the flat name → value mapping produced by every
//! match: values captured from `:name` segments first, then query string
//! values applied on top. A fresh map is built per match and never shares
//! storage with the route table.
//!
//! # Example
//!
//! ```
//! use url_navigator::RouteParams;
//!
//! let mut params = RouteParams::new();
//! params.insert("userId", "42");
//! assert_eq!(params.get("userId"), Some("42"));
//! assert_eq!(params.get_as::<u32>("userId"), Some(42));
//! ```

use std::collections::HashMap;

/// Parameters captured from path segments and the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// Create empty route parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing `HashMap`.
    pub fn from_map(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Get a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Get a parameter and parse it as a specific type.
    ///
    /// Returns `None` if the parameter doesn't exist or cannot be parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    /// Insert or overwrite a parameter, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.params.insert(key.into(), value.into())
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Get a reference to the underlying map.
    pub fn all(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Consume into the underlying map.
    pub fn into_map(self) -> HashMap<String, String> {
        self.params
    }

    /// Iterate over all `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Apply `other` on top of `self`; keys in `other` win on collision.
    ///
    /// The router uses this to lay query parameters over path parameters.
    ///
    /// ```
    /// use url_navigator::RouteParams;
    ///
    /// let mut path = RouteParams::new();
    /// path.insert("id", "from-path");
    /// path.insert("tab", "info");
    ///
    /// let mut query = RouteParams::new();
    /// query.insert("id", "from-query");
    ///
    /// path.overlay(query);
    /// assert_eq!(path.get("id"), Some("from-query"));
    /// assert_eq!(path.get("tab"), Some("info"));
    /// ```
    pub fn overlay(&mut self, other: RouteParams) {
        self.params.extend(other.params);
    }
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.params.insert(k.into(), v.into());
        }
    }
}
