//! Router configuration.
//!
//! [`RouterConfig`] is a plain builder value handed to
//! [`Router::with_config`](crate::Router::with_config). It controls how
//! incoming URLs are normalized before they reach the route table:
//!
//! - which application schemes (`myapp://`, `myapp:`) are stripped,
//! - whether a URL without a recognized scheme is rejected,
//! - whether query keys and values are percent-decoded.
//!
//! # Examples
//!
//! ```
//! use url_navigator::RouterConfig;
//!
//! let config = RouterConfig::new()
//!     .scheme("myapp")
//!     .strict_schemes(true);
//!
//! assert!(config.recognizes("MyApp"));
//! assert!(config.is_strict());
//! ```

/// Configuration for URL normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterConfig {
    schemes: Vec<String>,
    strict_schemes: bool,
    decode_query: bool,
}

impl RouterConfig {
    /// Create a permissive configuration: no schemes, raw query values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one recognized scheme, given without the trailing `:`.
    ///
    /// Empty names and names already present are ignored.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.push_scheme(scheme.into());
        self
    }

    /// Add several recognized schemes.
    pub fn schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for scheme in schemes {
            self.push_scheme(scheme.into());
        }
        self
    }

    /// Add schemes from platform URL-type declarations.
    ///
    /// Each declaration lists one or more schemes; only the first scheme of
    /// each declaration is taken, and declarations with no schemes are
    /// skipped.
    ///
    /// ```
    /// use url_navigator::RouterConfig;
    ///
    /// let config = RouterConfig::new().url_types(vec![
    ///     vec!["myapp", "myapp-legacy"],
    ///     vec![],
    ///     vec!["other"],
    /// ]);
    /// assert_eq!(config.recognized_schemes(), ["myapp", "other"]);
    /// ```
    pub fn url_types<I, D, S>(mut self, declarations: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for declaration in declarations {
            if let Some(first) = declaration.into_iter().next() {
                self.push_scheme(first.into());
            }
        }
        self
    }

    /// Require every matched URL to carry a recognized scheme.
    pub fn strict_schemes(mut self, strict: bool) -> Self {
        self.strict_schemes = strict;
        self
    }

    /// Percent-decode query keys and values (`+` decodes to a space).
    pub fn decode_query(mut self, decode: bool) -> Self {
        self.decode_query = decode;
        self
    }

    /// Recognized schemes in the order they were added.
    pub fn recognized_schemes(&self) -> &[String] {
        &self.schemes
    }

    /// Check whether `scheme` is recognized (ASCII case-insensitive).
    pub fn recognizes(&self, scheme: &str) -> bool {
        self.schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }

    /// Whether strict scheme checking is enabled.
    pub fn is_strict(&self) -> bool {
        self.strict_schemes
    }

    /// Whether query components are percent-decoded.
    pub fn decodes_query(&self) -> bool {
        self.decode_query
    }

    fn push_scheme(&mut self, scheme: String) {
        let scheme = scheme.trim_end_matches(':').to_string();
        if scheme.is_empty() || self.recognizes(&scheme) {
            return;
        }
        self.schemes.push(scheme);
    }
}
