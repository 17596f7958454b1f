//! Homepage controller: keeps the current search consistent with the URL.
//!
//! The controller is mounted from a [`Location`], translates search form
//! submissions into a fresh [`SearchQueryState`] plus a navigation request,
//! and reacts to location changes that did not go through the form (history
//! navigation, hand-edited URLs). Configuration and navigation are injected
//! through the [`ConfigSource`] and [`Navigator`] ports.

use tracing::debug;

use crate::query::{COORDINATES_KEY, Coordinates, LOCATION_TEXT_KEY, QueryParams, SEARCH_TEXT_KEY};
use crate::view::{self, ViewKind};

/// Path the homepage lives at. Every search navigates here.
pub const HOMEPAGE_PATH: &str = "/";

/// Read access to the parts of the site configuration the homepage needs.
pub trait ConfigSource {
    /// Root URL of the search API, or `None` until it is known.
    fn api_root(&self) -> Option<&str>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn api_root(&self) -> Option<&str> {
        (**self).api_root()
    }
}

/// Receives navigation requests issued by the controller.
pub trait Navigator {
    /// Replaces the current URL with `target`.
    fn navigate(&mut self, target: NavigationTarget);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, target: NavigationTarget) {
        (**self).navigate(target);
    }
}

/// Navigator that records every request, newest last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingNavigator {
    history: Vec<NavigationTarget>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[NavigationTarget] {
        &self.history
    }

    pub fn last(&self) -> Option<&NavigationTarget> {
        self.history.last()
    }

    pub fn into_last(self) -> Option<NavigationTarget> {
        self.history.into_iter().last()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, target: NavigationTarget) {
        self.history.push(target);
    }
}

/// A navigational location: path plus query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pathname: String,
    search: String,
    query: QueryParams,
}

impl Location {
    /// Builds a location from a path and an optional raw query string.
    pub fn new(pathname: &str, search: Option<&str>) -> Self {
        let pathname = if pathname.is_empty() {
            HOMEPAGE_PATH.to_string()
        } else {
            pathname.to_string()
        };
        let search = search.unwrap_or_default();
        let search = search.strip_prefix('?').unwrap_or(search).to_string();
        let query = QueryParams::parse(&search);

        Self {
            pathname,
            search,
            query,
        }
    }

    /// Parses a path-and-query reference such as `/?q=bakery#top`.
    pub fn parse(uri: &str) -> Self {
        let without_fragment = uri.split_once('#').map_or(uri, |(head, _)| head);
        match without_fragment.split_once('?') {
            Some((path, search)) => Self::new(path, Some(search)),
            None => Self::new(without_fragment, None),
        }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Raw query string without the leading `?`; empty when there is none.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }
}

/// Where the controller asks the router to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub pathname: String,
    pub query: QueryParams,
}

impl NavigationTarget {
    pub fn new(pathname: impl Into<String>, query: QueryParams) -> Self {
        Self {
            pathname: pathname.into(),
            query,
        }
    }

    /// Path plus query, e.g. `/?q=bakery`. No `?` when the query is empty.
    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, self.query.to_query_string())
        }
    }
}

/// The search currently shown on the homepage.
///
/// `search_coords` only makes sense alongside `search_location_text`: a
/// location without coordinates means the location could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQueryState {
    pub search_text: Option<String>,
    pub search_location_text: Option<String>,
    pub search_coords: Option<Coordinates>,
}

impl SearchQueryState {
    /// Reads `q`, `near` and `at`. Missing or empty keys become absent.
    pub fn from_query(query: &QueryParams) -> Self {
        Self {
            search_text: query.non_empty(SEARCH_TEXT_KEY).map(str::to_owned),
            search_location_text: query.non_empty(LOCATION_TEXT_KEY).map(str::to_owned),
            search_coords: query.non_empty(COORDINATES_KEY).map(Coordinates::from_raw),
        }
    }

    /// Query holding only the present fields, in `q`, `at`, `near` order.
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(text) = &self.search_text {
            query.push(SEARCH_TEXT_KEY, text.as_str());
        }
        if let Some(coords) = &self.search_coords {
            query.push(COORDINATES_KEY, coords.as_str());
        }
        if let Some(location) = &self.search_location_text {
            query.push(LOCATION_TEXT_KEY, location.as_str());
        }
        query
    }

    /// True when neither search text nor a location is set.
    pub fn is_blank(&self) -> bool {
        self.search_text.is_none() && self.search_location_text.is_none()
    }

    /// A location was given but it did not resolve to coordinates.
    pub fn is_location_not_found(&self) -> bool {
        self.search_location_text.is_some() && self.search_coords.is_none()
    }
}

/// Owns the homepage search state and keeps it in step with the URL.
#[derive(Debug)]
pub struct HomepageController<C, N> {
    config: C,
    navigator: N,
    state: SearchQueryState,
}

impl<C: ConfigSource, N: Navigator> HomepageController<C, N> {
    /// Creates a controller with an empty search.
    pub fn new(config: C, navigator: N) -> Self {
        Self {
            config,
            navigator,
            state: SearchQueryState::default(),
        }
    }

    /// Creates a controller and initializes it from `location`.
    pub fn mount(config: C, navigator: N, location: &Location) -> Self {
        let mut controller = Self::new(config, navigator);
        controller.initialize(location);
        controller
    }

    /// Resets the state from the `q`, `at` and `near` parameters of `location`.
    pub fn initialize(&mut self, location: &Location) {
        self.state = SearchQueryState::from_query(location.query());
        debug!(
            search_text = ?self.state.search_text,
            search_location_text = ?self.state.search_location_text,
            search_coords = ?self.state.search_coords,
            "Homepage state initialized from URL"
        );
    }

    /// Handles a search form submission.
    ///
    /// The new state is committed before the navigation request is issued,
    /// so anything rendered in response to the navigation sees it.
    pub fn on_search_submitted(
        &mut self,
        search_text: Option<&str>,
        search_location_text: Option<&str>,
        search_coords: Option<[f64; 2]>,
    ) {
        self.state = SearchQueryState {
            search_text: search_text.filter(|t| !t.is_empty()).map(str::to_owned),
            search_location_text: search_location_text
                .filter(|t| !t.is_empty())
                .map(str::to_owned),
            search_coords: search_coords.map(|[lat, lon]| Coordinates::from_lat_lon(lat, lon)),
        };
        self.finish_search();
    }

    fn finish_search(&mut self) {
        let target = NavigationTarget::new(HOMEPAGE_PATH, self.state.to_query());
        debug!(url = %target.to_url(), "Search submitted, navigating");
        self.navigator.navigate(target);
    }

    /// Reacts to a location change that did not come from the search form.
    ///
    /// An empty query string clears the search text. Location text and
    /// coordinates are left as they are.
    ///
    /// Only hosts that keep one controller alive across navigations call
    /// this. The web server mounts a fresh controller per request, so it
    /// re-reads the whole state through [`initialize`](Self::initialize).
    pub fn on_location_changed(&mut self, next: &Location) {
        if next.search().is_empty() {
            debug!("Query string cleared, dropping search text");
            self.state.search_text = None;
        }
    }

    pub fn is_location_not_found(&self) -> bool {
        self.state.is_location_not_found()
    }

    pub fn should_show_search_results(&self) -> bool {
        view::should_show_search_results(&self.state, &self.config)
    }

    /// Branch of the page to render for the current state.
    pub fn view(&self) -> ViewKind {
        view::select_view(&self.state, &self.config)
    }

    pub fn state(&self) -> &SearchQueryState {
        &self.state
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_parts(self) -> (SearchQueryState, N) {
        (self.state, self.navigator)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::ApiConfig;

    fn loaded_config() -> ApiConfig {
        ApiConfig {
            api_root: Some("https://api.example.org".to_string()),
            ..ApiConfig::default()
        }
    }

    fn mounted(uri: &str) -> HomepageController<ApiConfig, RecordingNavigator> {
        HomepageController::mount(loaded_config(), RecordingNavigator::new(), &Location::parse(uri))
    }

    #[test]
    fn test_initialize_with_search_text_only() {
        let controller = mounted("/?q=bakery");

        let state = controller.state();
        assert_eq!(state.search_text.as_deref(), Some("bakery"));
        assert_eq!(state.search_location_text, None);
        assert_eq!(state.search_coords, None);
    }

    #[test]
    fn test_initialize_with_location_and_coordinates() {
        let controller = mounted("/?near=Ottawa&at=45.4%2C-75.7");

        let state = controller.state();
        assert_eq!(state.search_text, None);
        assert_eq!(state.search_location_text.as_deref(), Some("Ottawa"));
        let coords = state.search_coords.as_ref().expect("coordinates present");
        assert_eq!(coords.as_str(), "45.4,-75.7");
        assert_eq!(coords.lat_lon(), Some((45.4, -75.7)));
    }

    #[test]
    fn test_initialize_passes_malformed_coordinates_through() {
        let controller = mounted("/?near=Ottawa&at=north-ish");

        let coords = controller.state().search_coords.as_ref().unwrap();
        assert_eq!(coords.as_str(), "north-ish");
        assert!(!controller.is_location_not_found());
    }

    #[test]
    fn test_initialize_resets_previous_state() {
        let mut controller = mounted("/?q=bakery&near=Ottawa&at=45.4,-75.7");
        controller.initialize(&Location::parse("/"));

        assert_eq!(controller.state(), &SearchQueryState::default());
    }

    #[test]
    fn test_location_not_found() {
        assert!(mounted("/?near=Atlantis").is_location_not_found());
        assert!(!mounted("/?near=Ottawa&at=45.4,-75.7").is_location_not_found());
        assert!(!mounted("/?q=bakery").is_location_not_found());
        assert!(!mounted("/?at=45.4,-75.7").is_location_not_found());
    }

    #[test]
    fn test_submit_text_only_navigates_with_q() {
        let mut controller = mounted("/");
        controller.on_search_submitted(Some("bakery"), None, None);

        let target = controller.navigator().last().unwrap();
        assert_eq!(target.pathname, "/");
        let pairs: Vec<_> = target.query.iter().collect();
        assert_eq!(pairs, vec![("q", "bakery")]);
        assert_eq!(target.to_url(), "/?q=bakery");
    }

    #[test]
    fn test_submit_location_with_coordinates() {
        let mut controller = mounted("/");
        controller.on_search_submitted(None, Some("Ottawa"), Some([45.4, -75.7]));

        let target = controller.navigator().last().unwrap();
        assert_eq!(target.query.len(), 2);
        assert_eq!(target.query.get("near"), Some("Ottawa"));
        assert_eq!(target.query.get("at"), Some("45.4,-75.7"));
        assert!(!target.query.contains_key("q"));
    }

    #[test]
    fn test_submit_replaces_whole_state() {
        let mut controller = mounted("/?q=old&near=Ottawa&at=45.4,-75.7");
        controller.on_search_submitted(Some("new"), None, None);

        let state = controller.state();
        assert_eq!(state.search_text.as_deref(), Some("new"));
        assert_eq!(state.search_location_text, None);
        assert_eq!(state.search_coords, None);
    }

    #[test]
    fn test_submit_issues_exactly_one_navigation() {
        let mut controller = mounted("/");
        controller.on_search_submitted(Some("soap"), Some("Kanata"), None);

        assert_eq!(controller.navigator().history().len(), 1);
    }

    #[test]
    fn test_submit_with_nothing_navigates_to_bare_homepage() {
        let mut controller = mounted("/?q=bakery");
        controller.on_search_submitted(Some(""), None, None);

        assert_eq!(controller.navigator().last().unwrap().to_url(), "/");
        assert!(controller.state().is_blank());
    }

    /// Navigator writing into caller-owned storage.
    struct StateProbe<'a> {
        seen: &'a mut Vec<String>,
    }

    impl Navigator for StateProbe<'_> {
        fn navigate(&mut self, target: NavigationTarget) {
            self.seen.push(target.to_url());
        }
    }

    #[test]
    fn test_navigation_target_matches_committed_state() {
        let mut seen = Vec::new();
        let mut controller = HomepageController::new(loaded_config(), StateProbe { seen: &mut seen });
        controller.on_search_submitted(Some("coffee"), None, None);
        let state = controller.state().clone();
        drop(controller);

        let relocated = Location::parse(&seen[0]);
        assert_eq!(SearchQueryState::from_query(relocated.query()), state);
    }

    #[test]
    fn test_location_change_with_empty_query_clears_text() {
        let mut controller = mounted("/?q=bakery&near=Ottawa");
        controller.on_location_changed(&Location::parse("/"));

        let state = controller.state();
        assert_eq!(state.search_text, None);
        // Location text survives the reset.
        assert_eq!(state.search_location_text.as_deref(), Some("Ottawa"));
    }

    #[test]
    fn test_location_change_with_query_keeps_state() {
        let mut controller = mounted("/?q=bakery");
        controller.on_location_changed(&Location::parse("/?near=Ottawa"));

        assert_eq!(controller.state().search_text.as_deref(), Some("bakery"));
    }

    #[test]
    fn test_location_parse() {
        let location = Location::parse("/?q=a+b#results");
        assert_eq!(location.pathname(), "/");
        assert_eq!(location.search(), "q=a+b");
        assert_eq!(location.query().get("q"), Some("a b"));

        let bare = Location::parse("");
        assert_eq!(bare.pathname(), "/");
        assert_eq!(bare.search(), "");
    }

    #[test]
    fn test_should_show_search_results_requires_api_root() {
        let controller = HomepageController::mount(
            ApiConfig::default(),
            RecordingNavigator::new(),
            &Location::parse("/?q=bakery"),
        );

        assert!(!controller.should_show_search_results());
        assert!(mounted("/?q=bakery").should_show_search_results());
    }

    proptest! {
        #[test]
        fn prop_search_text_round_trips(text in "[a-zA-Z0-9 ,&+=%?#\u{e9}-]{1,40}") {
            let query: QueryParams = [("q", text.as_str())].into_iter().collect();
            let location = Location::new("/", Some(&query.to_query_string()));
            let controller = HomepageController::mount(
                loaded_config(),
                RecordingNavigator::new(),
                &location,
            );

            prop_assert_eq!(controller.state().search_text.as_deref(), Some(text.as_str()));
            prop_assert_eq!(&controller.state().search_location_text, &None);
            prop_assert_eq!(&controller.state().search_coords, &None);
        }

        #[test]
        fn prop_empty_query_reset_is_idempotent(
            text in proptest::option::of("[a-z ]{1,20}"),
            near in proptest::option::of("[A-Za-z]{1,20}"),
        ) {
            let mut controller = HomepageController::new(loaded_config(), RecordingNavigator::new());
            controller.on_search_submitted(text.as_deref(), near.as_deref(), None);

            let empty = Location::parse("/");
            controller.on_location_changed(&empty);
            let once = controller.state().clone();
            controller.on_location_changed(&empty);

            prop_assert_eq!(&once.search_text, &None);
            prop_assert_eq!(controller.state(), &once);
        }

        #[test]
        fn prop_submitted_search_survives_navigation(
            text in proptest::option::of("[a-z]{1,12}"),
            near in proptest::option::of("[A-Z][a-z]{1,12}"),
            lat in -90.0f64..90.0,
            lon in -180.0f64..180.0,
        ) {
            let mut controller = HomepageController::new(loaded_config(), RecordingNavigator::new());
            controller.on_search_submitted(text.as_deref(), near.as_deref(), Some([lat, lon]));
            let submitted = controller.state().clone();
            let (_, navigator) = controller.into_parts();

            let url = navigator.into_last().unwrap().to_url();
            let remounted = HomepageController::mount(
                loaded_config(),
                RecordingNavigator::new(),
                &Location::parse(&url),
            );
            prop_assert_eq!(remounted.state(), &submitted);
            prop_assert_eq!(
                remounted.state().search_coords.as_ref().and_then(Coordinates::lat_lon),
                Some((lat, lon))
            );
        }
    }
}
