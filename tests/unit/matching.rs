//! Unit tests for segment-trie matching
//!
//! Literal segments take precedence over parameters at every level, and the
//! walk never backtracks once a branch is chosen.

#[cfg(test)]
mod matching_tests {
    use crate::common::{assert_param_equals, init_logging, Screen};
    use url_navigator::{RouteEntry, RoutePattern, RouteTarget, RouteTrie, Router};

    fn trie(patterns: &[(&str, Screen)]) -> RouteTrie<Screen> {
        init_logging();
        let mut trie = RouteTrie::new();
        for (pattern, screen) in patterns {
            let parsed = RoutePattern::parse(pattern).unwrap();
            trie.insert(
                parsed.segments(),
                RouteEntry::new(*pattern, RouteTarget::Target(*screen)),
            )
            .unwrap();
        }
        trie
    }

    #[test]
    fn test_exact_literal_match() {
        let trie = trie(&[("/about", Screen::About)]);
        let (entry, params) = trie.lookup(&["about"]).unwrap();
        assert_eq!(entry.target(), Some(&Screen::About));
        assert!(params.is_empty());
    }

    #[test]
    fn test_literal_beats_param() {
        let trie = trie(&[("/user/:userId", Screen::User), ("/user/add", Screen::About)]);

        let (entry, params) = trie.lookup(&["user", "add"]).unwrap();
        assert_eq!(entry.pattern(), "/user/add");
        assert!(params.is_empty());

        let (entry, params) = trie.lookup(&["user", "7"]).unwrap();
        assert_eq!(entry.pattern(), "/user/:userId");
        assert_param_equals(&params, "userId", "7");
    }

    #[test]
    fn test_literal_beats_param_regardless_of_order() {
        let trie = trie(&[("/user/add", Screen::About), ("/user/:userId", Screen::User)]);
        let (entry, _) = trie.lookup(&["user", "add"]).unwrap();
        assert_eq!(entry.pattern(), "/user/add");
    }

    #[test]
    fn test_prefix_is_not_a_match() {
        let trie = trie(&[("/user/:userId/story", Screen::StoryList)]);
        assert!(trie.lookup(&["user", "1"]).is_none());
        assert!(trie.lookup(&["user"]).is_none());
    }

    #[test]
    fn test_longer_url_is_not_a_match() {
        let trie = trie(&[("/about", Screen::About)]);
        assert!(trie.lookup(&["about", "more"]).is_none());
    }

    #[test]
    fn test_no_backtracking_into_param_branch() {
        // "b" takes the literal branch, which has no "d" below it
        let trie = trie(&[("/a/b/c", Screen::About), ("/a/:x/d", Screen::User)]);
        assert!(trie.lookup(&["a", "b", "d"]).is_none());
        assert!(trie.lookup(&["a", "z", "d"]).is_some());
    }

    #[test]
    fn test_router_prefers_deeper_literal() {
        let mut router: Router<Screen> = Router::default();
        router.map_target("/user/:userId", Screen::User).unwrap();
        router
            .map_target("/user/:userId/story", Screen::StoryList)
            .unwrap();

        let (target, params) = router.resolve_target("/user/3/story").unwrap();
        assert_eq!(target, &Screen::StoryList);
        assert_param_equals(&params, "userId", "3");

        let (target, _) = router.resolve_target("/user/3").unwrap();
        assert_eq!(target, &Screen::User);
    }
}
