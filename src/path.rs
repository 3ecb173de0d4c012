//! URL and pattern splitting.
//!
//! Turns a raw route string into the pieces the route table works with:
//!
//! 1. A recognized application scheme (`myapp://` or `myapp:`) is stripped.
//!    Unknown schemes are left alone, so bare paths are always valid input.
//! 2. The string is cut at the first `?` into path and query.
//! 3. The path is split on `/` with empty segments dropped, which absorbs
//!    leading, trailing and doubled separators.
//!
//! Segment order is root-to-leaf and is preserved.
//!
//! # Examples
//!
//! ```
//! use url_navigator::path::parse_url;
//! use url_navigator::RouterConfig;
//!
//! let config = RouterConfig::new().scheme("myapp");
//! let parsed = parse_url("myapp://user/42/?tab=posts", &config);
//!
//! assert_eq!(parsed.scheme, Some("myapp"));
//! assert_eq!(parsed.segments, vec!["user", "42"]);
//! assert_eq!(parsed.query, Some("tab=posts"));
//! ```

use crate::{trace_log, RouterConfig};

/// A URL broken into scheme, path segments and raw query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl<'a> {
    /// The recognized scheme that was stripped, as written in the URL.
    pub scheme: Option<&'a str>,
    /// Non-empty path segments, root first.
    pub segments: Vec<&'a str>,
    /// Everything after the first `?`, if there was one.
    pub query: Option<&'a str>,
}

/// Split `url` into scheme, segments and query using `config`'s schemes.
pub fn parse_url<'a>(url: &'a str, config: &RouterConfig) -> ParsedUrl<'a> {
    let (scheme, rest) = strip_scheme(url, config);
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    ParsedUrl {
        scheme,
        segments: split_path(path),
        query,
    }
}

/// Strip a leading recognized scheme from `url`.
///
/// Accepts both `scheme://rest` and `scheme:rest`. Returns the scheme as
/// written and the remainder; if no configured scheme matches, returns
/// `(None, url)`.
///
/// ```
/// use url_navigator::path::strip_scheme;
/// use url_navigator::RouterConfig;
///
/// let config = RouterConfig::new().scheme("myapp");
/// assert_eq!(strip_scheme("myapp://about", &config), (Some("myapp"), "about"));
/// assert_eq!(strip_scheme("myapp:/about", &config), (Some("myapp"), "/about"));
/// assert_eq!(strip_scheme("https://about", &config), (None, "https://about"));
/// ```
pub fn strip_scheme<'a>(url: &'a str, config: &RouterConfig) -> (Option<&'a str>, &'a str) {
    for scheme in config.recognized_schemes() {
        let Some(head) = url.get(..scheme.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(scheme) {
            continue;
        }
        if let Some(rest) = url[scheme.len()..].strip_prefix(':') {
            let rest = rest.strip_prefix("//").unwrap_or(rest);
            trace_log!("Stripped scheme '{}' from '{}'", head, url);
            return (Some(head), rest);
        }
    }
    (None, url)
}

/// Split a path into its non-empty `/`-delimited segments.
///
/// ```
/// use url_navigator::path::split_path;
///
/// assert_eq!(split_path("/users/123"), vec!["users", "123"]);
/// assert_eq!(split_path("//users///123/"), vec!["users", "123"]);
/// assert!(split_path("/").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Path part of a route string, with any query suffix removed.
pub(crate) fn without_query(route: &str) -> &str {
    route.split_once('?').map_or(route, |(path, _)| path)
}
