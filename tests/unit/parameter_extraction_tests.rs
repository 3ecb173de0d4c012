//! Unit tests for pattern parsing and parameter extraction

#[cfg(test)]
mod parameter_extraction_tests {
    use crate::common::{assert_param_equals, params_with_multiple};
    use url_navigator::{RoutePattern, Segment};

    #[test]
    fn test_segments_classified() {
        let pattern = RoutePattern::parse("/user/:userId/story").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("user".to_string()),
                Segment::Param("userId".to_string()),
                Segment::Literal("story".to_string()),
            ]
        );
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["userId"]);
    }

    #[test]
    fn test_rejects_empty_pattern() {
        let err = RoutePattern::parse("/").unwrap_err();
        assert!(err.is_registration_error());
        assert!(RoutePattern::parse("").is_err());
    }

    #[test]
    fn test_rejects_empty_param_name() {
        assert!(RoutePattern::parse("/user/:").is_err());
    }

    #[test]
    fn test_rejects_repeated_param_name() {
        assert!(RoutePattern::parse("/a/:id/b/:id").is_err());
    }

    #[test]
    fn test_url_for_substitutes_params() {
        let pattern = RoutePattern::parse("/user/:userId/story").unwrap();
        let params = params_with_multiple(vec![("userId", "42")]);
        assert_eq!(pattern.url_for(&params).as_deref(), Some("/user/42/story"));
    }

    #[test]
    fn test_url_for_missing_param() {
        let pattern = RoutePattern::parse("/user/:userId").unwrap();
        assert_eq!(pattern.url_for(&params_with_multiple(vec![])), None);
    }

    #[test]
    fn test_url_for_round_trips_through_router() {
        let mut router = url_navigator::Router::new();
        router.map_target("/story/:storyId", "Story".into()).unwrap();

        let pattern = RoutePattern::parse("/story/:storyId").unwrap();
        let url = pattern
            .url_for(&params_with_multiple(vec![("storyId", "9")]))
            .unwrap();
        let (_, params) = router.resolve_target(&url).unwrap();
        assert_param_equals(&params, "storyId", "9");
    }
}
