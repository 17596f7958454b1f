//! Homepage - intro, search form and results, driven by the URL

use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use maud::{Markup, html};
use sedir_core::{ConfigSource, HomepageController, Location, SearchQueryState, ViewKind};
use sedir_search::{Enterprise, SearchRequest};
use tracing::debug;

use crate::components::{self, intro, intro_links, location_not_found, search_form, search_results};
use crate::navigation::RedirectNavigator;
use crate::server::AppState;

const PAGE_TITLE: &str = "Ottawa's Social Enterprise Directory";

/// Renders the homepage for the request URL.
///
/// The controller is mounted from the URL; results are only fetched when the
/// selected view is [`ViewKind::Results`].
pub async fn homepage(State(state): State<AppState>, uri: Uri) -> Html<String> {
    let location = Location::new(uri.path(), uri.query());
    let config = state.config.snapshot();

    let (view, search) = {
        let controller = HomepageController::mount(&config, RedirectNavigator::default(), &location);
        (controller.view(), controller.state().clone())
    };
    debug!(%view, url = %uri, "Rendering homepage");

    let results = match (view, config.api_root()) {
        (ViewKind::Results, Some(api_root)) => {
            state
                .search_service
                .search_or_empty(api_root, &SearchRequest::from_state(&search))
                .await
        }
        _ => Vec::new(),
    };

    Html(render_homepage(view, &search, &results).into_string())
}

/// Renders the homepage branch `view` for `search`.
pub fn render_homepage(view: ViewKind, search: &SearchQueryState, results: &[Enterprise]) -> Markup {
    let content = html! {
        div class="homepage-component" data-view=(view.as_str()) {
            @if view == ViewKind::Intro {
                (intro())
            }

            (search_form(search.search_text.as_deref(), search.search_location_text.as_deref()))

            @match view {
                ViewKind::Intro => {
                    (intro_links())
                }
                ViewKind::Results => {
                    div class="page mt-8" { (search_results(search, results)) }
                }
                ViewKind::LocationNotFound => {
                    div class="page mt-8" {
                        (location_not_found(search.search_location_text.as_deref().unwrap_or_default()))
                    }
                }
                ViewKind::Empty => {}
            }
        }
    };

    components::page(PAGE_TITLE, content)
}
