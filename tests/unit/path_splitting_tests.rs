//! Unit tests for URL splitting and scheme stripping

#[cfg(test)]
mod path_splitting_tests {
    use url_navigator::path::{parse_url, split_path, strip_scheme};
    use url_navigator::RouterConfig;

    #[test]
    fn test_leading_trailing_and_doubled_slashes() {
        assert_eq!(split_path("/user/1"), vec!["user", "1"]);
        assert_eq!(split_path("user/1/"), vec!["user", "1"]);
        assert_eq!(split_path("//user//1//"), vec!["user", "1"]);
    }

    #[test]
    fn test_root_has_no_segments() {
        assert!(split_path("/").is_empty());
        assert!(split_path("").is_empty());
    }

    #[test]
    fn test_both_scheme_forms() {
        let config = RouterConfig::new().scheme("swiftrouter");
        assert_eq!(
            parse_url("swiftrouter://user/1", &config).segments,
            vec!["user", "1"]
        );
        assert_eq!(
            parse_url("swiftrouter:/user/1", &config).segments,
            vec!["user", "1"]
        );
        assert_eq!(
            parse_url("swiftrouter:user/1", &config).segments,
            vec!["user", "1"]
        );
    }

    #[test]
    fn test_scheme_case_insensitive() {
        let config = RouterConfig::new().scheme("MyApp");
        let (scheme, rest) = strip_scheme("myapp://about", &config);
        assert_eq!(scheme, Some("myapp"));
        assert_eq!(rest, "about");
    }

    #[test]
    fn test_unknown_scheme_left_in_path() {
        let config = RouterConfig::new().scheme("myapp");
        let parsed = parse_url("other://about", &config);
        assert_eq!(parsed.scheme, None);
        assert_eq!(parsed.segments, vec!["other:", "about"]);
    }

    #[test]
    fn test_scheme_must_be_followed_by_colon() {
        let config = RouterConfig::new().scheme("my");
        let (scheme, rest) = strip_scheme("myapp://about", &config);
        assert_eq!(scheme, None);
        assert_eq!(rest, "myapp://about");
    }

    #[test]
    fn test_query_split_at_first_question_mark() {
        let parsed = parse_url("/search?q=a?b&x=1", &RouterConfig::default());
        assert_eq!(parsed.segments, vec!["search"]);
        assert_eq!(parsed.query, Some("q=a?b&x=1"));
    }

    #[test]
    fn test_url_types_take_first_scheme() {
        let config = RouterConfig::new().url_types([vec!["first", "second"], vec!["third"]]);
        assert!(config.recognizes("first"));
        assert!(!config.recognizes("second"));
        assert!(config.recognizes("third"));
        assert_eq!(parse_url("third://a", &config).segments, vec!["a"]);
    }
}
