//! Which branch of the homepage to show.
//!
//! Recomputed from the state on every render; nothing is remembered between
//! calls.

use std::fmt;

use crate::homepage::{ConfigSource, SearchQueryState};

/// The four branches of the homepage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// No search yet: welcome content and the search form.
    Intro,
    /// A location was given but could not be resolved.
    LocationNotFound,
    /// Results for the current search.
    Results,
    /// Search form only, e.g. while the API root is still unknown.
    Empty,
}

impl ViewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Intro => "intro",
            ViewKind::LocationNotFound => "location-not-found",
            ViewKind::Results => "results",
            ViewKind::Empty => "empty",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether results should be fetched and shown for `state`.
pub fn should_show_search_results<C>(state: &SearchQueryState, config: &C) -> bool
where
    C: ConfigSource + ?Sized,
{
    // Nothing to query until the API root is known.
    if config.api_root().is_none() {
        return false;
    }

    if state.is_location_not_found() {
        return false;
    }

    state.search_text.is_some() || state.search_location_text.is_some()
}

/// Picks the branch to render for `state`.
pub fn select_view<C>(state: &SearchQueryState, config: &C) -> ViewKind
where
    C: ConfigSource + ?Sized,
{
    if state.is_blank() {
        ViewKind::Intro
    } else if should_show_search_results(state, config) {
        ViewKind::Results
    } else if state.is_location_not_found() {
        ViewKind::LocationNotFound
    } else {
        ViewKind::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::query::Coordinates;

    fn with_api_root() -> ApiConfig {
        ApiConfig {
            api_root: Some("https://api.example.org".to_string()),
            ..ApiConfig::default()
        }
    }

    fn state(text: Option<&str>, near: Option<&str>, at: Option<&str>) -> SearchQueryState {
        SearchQueryState {
            search_text: text.map(str::to_owned),
            search_location_text: near.map(str::to_owned),
            search_coords: at.map(Coordinates::from_raw),
        }
    }

    #[test]
    fn test_blank_state_selects_intro() {
        assert_eq!(select_view(&state(None, None, None), &with_api_root()), ViewKind::Intro);
        assert_eq!(
            select_view(&state(None, None, None), &ApiConfig::default()),
            ViewKind::Intro
        );
    }

    #[test]
    fn test_coordinates_alone_still_select_intro() {
        let view = select_view(&state(None, None, Some("45.4,-75.7")), &with_api_root());
        assert_eq!(view, ViewKind::Intro);
    }

    #[test]
    fn test_search_text_selects_results() {
        let view = select_view(&state(Some("bakery"), None, None), &with_api_root());
        assert_eq!(view, ViewKind::Results);
    }

    #[test]
    fn test_resolved_location_selects_results() {
        let view = select_view(
            &state(None, Some("Ottawa"), Some("45.4,-75.7")),
            &with_api_root(),
        );
        assert_eq!(view, ViewKind::Results);
    }

    #[test]
    fn test_unresolved_location_selects_not_found() {
        let view = select_view(&state(Some("bakery"), Some("Atlantis"), None), &with_api_root());
        assert_eq!(view, ViewKind::LocationNotFound);
    }

    #[test]
    fn test_missing_api_root_suppresses_results() {
        let config = ApiConfig::default();
        let searching = state(Some("bakery"), None, None);

        assert!(!should_show_search_results(&searching, &config));
        assert_eq!(select_view(&searching, &config), ViewKind::Empty);
    }

    #[test]
    fn test_not_found_does_not_depend_on_api_root() {
        let view = select_view(&state(None, Some("Atlantis"), None), &ApiConfig::default());
        assert_eq!(view, ViewKind::LocationNotFound);
    }

    #[test]
    fn test_blank_api_root_counts_as_missing() {
        let config = ApiConfig {
            api_root: Some(String::new()),
            ..ApiConfig::default()
        };
        assert!(!should_show_search_results(&state(Some("bakery"), None, None), &config));
    }

    #[test]
    fn test_view_kind_labels() {
        assert_eq!(ViewKind::LocationNotFound.to_string(), "location-not-found");
        assert_eq!(ViewKind::Results.as_str(), "results");
    }
}
