//! Query string parsing.
//!
//! A query string is split on `&`; each non-empty component is split on its
//! first `=` into key and value. Components without `=` (and components with
//! an empty key) are skipped. A key that appears twice keeps its last value.
//!
//! ```
//! use url_navigator::query::parse_query;
//!
//! let params = parse_query("username=hello&password=123&flag&username=bye", false);
//! assert_eq!(params.get("username"), Some("bye"));
//! assert_eq!(params.get("password"), Some("123"));
//! assert!(!params.contains("flag"));
//! ```

use crate::RouteParams;

/// Parse `query` into a flat parameter map.
///
/// A component with an empty key (`=value`) is dropped rather than stored
/// under `""`, so every returned key names a real parameter.
///
/// When `decode` is set, `%XX` escapes and `+` are decoded in both keys
/// and values.
pub fn parse_query(query: &str, decode: bool) -> RouteParams {
    let mut params = RouteParams::new();

    for component in query.split('&').filter(|c| !c.is_empty()) {
        let Some((key, value)) = component.split_once('=') else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        if decode {
            params.insert(decode_uri_component(key), decode_uri_component(value));
        } else {
            params.insert(key, value);
        }
    }

    params
}

/// Decode `%XX` escapes and `+` in a query component.
///
/// Malformed escapes are kept verbatim; byte sequences that are not valid
/// UTF-8 after decoding are replaced with U+FFFD.
pub fn decode_uri_component(s: &str) -> String {
    // `+` first so an escaped `%2B` still decodes to a literal plus
    let spaced = s.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_basic() {
        let params = parse_query("page=1&sort=name", false);
        assert_eq!(params.get("page"), Some("1"));
        assert_eq!(params.get("sort"), Some("name"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_splits_on_first_equals() {
        let params = parse_query("token=a=b=c", false);
        assert_eq!(params.get("token"), Some("a=b=c"));
    }

    #[test]
    fn test_malformed_components_skipped() {
        let params = parse_query("&&novalue&=orphan&ok=1&", false);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("ok"), Some("1"));
    }

    #[test]
    fn test_empty_value_kept() {
        let params = parse_query("name=", false);
        assert_eq!(params.get("name"), Some(""));
    }

    #[test]
    fn test_last_write_wins() {
        let params = parse_query("tag=a&tag=b&tag=c", false);
        assert_eq!(params.get("tag"), Some("c"));
    }

    #[test]
    fn test_empty_query_string() {
        assert!(parse_query("", false).is_empty());
        assert!(parse_query("", true).is_empty());
    }

    #[test]
    fn test_raw_values_by_default() {
        let params = parse_query("q=hello%20world+again", false);
        assert_eq!(params.get("q"), Some("hello%20world+again"));
    }

    #[test]
    fn test_decoding() {
        let params = parse_query("q=hello%20world+again&na%6De=%C3%BC", true);
        assert_eq!(params.get("q"), Some("hello world again"));
        assert_eq!(params.get("name"), Some("ü"));
    }

    #[test]
    fn test_decode_malformed_escapes() {
        assert_eq!(decode_uri_component("100%"), "100%");
        assert_eq!(decode_uri_component("%zz1"), "%zz1");
        assert_eq!(decode_uri_component("%4"), "%4");
        assert_eq!(decode_uri_component("a%2Bb+c"), "a+b c");
    }
}
