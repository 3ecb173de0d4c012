//! Route pattern parsing.
//!
//! A pattern is a `/`-delimited list of segments:
//!
//! - `:name` declares a parameter that captures one URL segment,
//! - anything else is a literal matched exactly (case-sensitive).
//!
//! Any `?query` suffix on a pattern is ignored. A pattern must have at
//! least one segment, parameter names must be non-empty, and a name may
//! appear only once per pattern.
//!
//! # Examples
//!
//! ```
//! use url_navigator::{RoutePattern, RouteParams, Segment};
//!
//! let pattern = RoutePattern::parse("/user/:userId/story").unwrap();
//! assert_eq!(pattern.segments()[1], Segment::Param("userId".into()));
//! assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["userId"]);
//!
//! let params: RouteParams = [("userId", "42")].into_iter().collect();
//! assert_eq!(pattern.url_for(&params).as_deref(), Some("/user/42/story"));
//! ```

use crate::path::{split_path, without_query};
use crate::{Result, RouteParams, RouterError};
use std::fmt;

/// Prefix marking a parameter segment.
pub const PARAM_PREFIX: char = ':';

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Matched exactly.
    Literal(String),
    /// Captures one URL segment under the given name.
    Param(String),
}

impl Segment {
    /// Classify a raw segment.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(PARAM_PREFIX) {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Literal(raw.to_string()),
        }
    }

    /// The parameter name, if this is a parameter segment.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Param(name) => Some(name),
            Segment::Literal(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(s) => f.write_str(s),
            Segment::Param(name) => write!(f, "{}{}", PARAM_PREFIX, name),
        }
    }
}

/// A validated route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse and validate `pattern`.
    pub fn parse(pattern: &str) -> Result<Self> {
        Self::parse_path(pattern, pattern)
    }

    /// Parse `path` but keep `raw` as the pattern text reported in
    /// diagnostics. Used when a scheme was stripped beforehand.
    pub(crate) fn parse_path(raw: &str, path: &str) -> Result<Self> {
        let parts = split_path(without_query(path));
        if parts.is_empty() {
            return Err(RouterError::invalid_pattern(raw, "pattern has no segments"));
        }

        let mut segments: Vec<Segment> = Vec::with_capacity(parts.len());
        for part in parts {
            let segment = Segment::parse(part);
            if let Some(name) = segment.param_name() {
                if name.is_empty() {
                    return Err(RouterError::invalid_pattern(raw, "empty parameter name"));
                }
                if segments.iter().any(|s| s.param_name() == Some(name)) {
                    return Err(RouterError::invalid_pattern(
                        raw,
                        format!("parameter '{}' declared twice", name),
                    ));
                }
            }
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern text as registered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed segments, root first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of all parameters, in order of appearance.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::param_name)
    }

    /// Build a concrete path by substituting `params` into the pattern.
    ///
    /// Returns `None` if a parameter has no value in `params`. Extra entries
    /// in `params` are ignored.
    pub fn url_for(&self, params: &RouteParams) -> Option<String> {
        let mut url = String::new();
        for segment in &self.segments {
            url.push('/');
            match segment {
                Segment::Literal(s) => url.push_str(s),
                Segment::Param(name) => url.push_str(params.get(name)?),
            }
        }
        Some(url)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
