//! Unit tests for parameter merging
//!
//! Path parameters first, query parameters laid over them.

#[cfg(test)]
mod params_tests {
    use crate::common::{assert_param_equals, assert_param_not_present, params_with_multiple};
    use url_navigator::query::parse_query;
    use url_navigator::{RouteParams, Router, RouterConfig};

    #[test]
    fn test_overlay_adds_new_keys() {
        let mut params = params_with_multiple(vec![("userId", "1")]);
        params.overlay(params_with_multiple(vec![("tab", "posts")]));
        assert_eq!(params.len(), 2);
        assert_param_equals(&params, "userId", "1");
        assert_param_equals(&params, "tab", "posts");
    }

    #[test]
    fn test_collision_query_wins() {
        let mut params = params_with_multiple(vec![("id", "old")]);
        params.overlay(params_with_multiple(vec![("id", "new")]));
        assert_param_equals(&params, "id", "new");
    }

    #[test]
    fn test_empty_overlay() {
        let mut params = params_with_multiple(vec![("id", "1")]);
        params.overlay(RouteParams::new());
        assert_eq!(params, params_with_multiple(vec![("id", "1")]));
    }

    #[test]
    fn test_malformed_query_components_skipped() {
        let params = parse_query("a=1&flag&=x&&b=2=3", false);
        assert_param_equals(&params, "a", "1");
        assert_param_equals(&params, "b", "2=3");
        assert_param_not_present(&params, "flag");
        assert_param_not_present(&params, "");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_empty_value_kept() {
        let params = parse_query("name=", false);
        assert_param_equals(&params, "name", "");
    }

    #[test]
    fn test_repeated_key_last_wins() {
        let params = parse_query("k=1&k=2", false);
        assert_param_equals(&params, "k", "2");
    }

    #[test]
    fn test_raw_values_by_default() {
        let mut router = Router::new();
        router.map_target("/search", "Search".into()).unwrap();
        let matched = router.match_url("/search?q=a%20b").unwrap().unwrap();
        assert_param_equals(&matched.params, "q", "a%20b");
    }

    #[test]
    fn test_decoded_values_when_enabled() {
        let mut router: Router = Router::with_config(RouterConfig::new().decode_query(true));
        router.map_target("/search", "Search".into()).unwrap();
        let matched = router.match_url("/search?q=a%20b+c").unwrap().unwrap();
        assert_param_equals(&matched.params, "q", "a b c");
    }

    #[test]
    fn test_query_overrides_path_param_through_router() {
        let mut router = Router::new();
        router.map_target("/user/:userId", "User".into()).unwrap();
        let matched = router.match_url("/user/1?userId=2").unwrap().unwrap();
        assert_param_equals(&matched.params, "userId", "2");
    }
}
