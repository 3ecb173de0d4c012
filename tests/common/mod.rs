//! Test utilities shared by the integration tests
//!
//! Provides screen fixtures, router builders and assertion helpers.

#![allow(dead_code)]

use url_navigator::*;

/// Route logging to the test output (`RUST_LOG=url_navigator=trace`).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Target tags used by the fixtures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    About,
    User,
    Story,
    StoryList,
    Identifier,
}

/// Screen built from user route parameters
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserScreen {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Routable for UserScreen {
    fn set_param(&mut self, key: &str, value: &str) {
        match key {
            "userId" => self.user_id = Some(value.to_string()),
            "username" => self.username = Some(value.to_string()),
            "password" => self.password = Some(value.to_string()),
            _ => {}
        }
    }
}

/// Screen with no parameters
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AboutScreen;

impl Routable for AboutScreen {
    fn set_param(&mut self, _key: &str, _value: &str) {}
}

/// Everything the test registry can build
#[derive(Debug, Clone, PartialEq)]
pub enum Built {
    About(AboutScreen),
    User(UserScreen),
}

impl From<AboutScreen> for Built {
    fn from(screen: AboutScreen) -> Self {
        Built::About(screen)
    }
}

impl From<UserScreen> for Built {
    fn from(screen: UserScreen) -> Self {
        Built::User(screen)
    }
}

/// Router with the screen routes from the demo app
pub fn screen_router() -> Router<Screen> {
    init_logging();
    let mut router = Router::with_config(RouterConfig::new().scheme("swiftrouter"));
    router.map_target("/about", Screen::About).unwrap();
    router.map_target("/user/:userId", Screen::User).unwrap();
    router.map_target("/story/:storyId", Screen::Story).unwrap();
    router
        .map_target("/user/:userId/story", Screen::StoryList)
        .unwrap();
    router
        .map_target("/anotherScreenFromStoryboard/:identifier", Screen::Identifier)
        .unwrap();
    router
}

/// Registry constructing the About and User screens
pub fn screen_registry() -> TargetRegistry<Screen, Built> {
    let mut registry: TargetRegistry<Screen, Built> = TargetRegistry::new();
    registry
        .register_routable::<AboutScreen>(Screen::About)
        .register_routable::<UserScreen>(Screen::User);
    registry
}

/// Assert that route parameters contain expected key-value pair
pub fn assert_param_equals(params: &RouteParams, key: &str, expected: &str) {
    let value = params.get(key);
    assert!(
        value.is_some(),
        "Parameter '{}' not found in RouteParams",
        key
    );
    assert_eq!(
        value.unwrap(),
        expected,
        "Parameter '{}' has wrong value",
        key
    );
}

/// Assert that route parameters do NOT contain a key
pub fn assert_param_not_present(params: &RouteParams, key: &str) {
    assert!(
        params.get(key).is_none(),
        "Parameter '{}' should not be present",
        key
    );
}

/// Create RouteParams with multiple key-value pairs
pub fn params_with_multiple(pairs: Vec<(&str, &str)>) -> RouteParams {
    pairs.into_iter().collect()
}
