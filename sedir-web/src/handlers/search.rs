//! Search form submission

use axum::extract::{Form, State};
use axum::response::Redirect;
use sedir_core::HomepageController;
use sedir_search::Geocoder;
use serde::Deserialize;
use tracing::debug;

use crate::navigation::RedirectNavigator;
use crate::server::AppState;

/// Fields posted by the homepage search form.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    pub q: Option<String>,
    pub near: Option<String>,
}

impl SearchForm {
    fn text(&self) -> Option<&str> {
        non_blank(self.q.as_deref())
    }

    fn location(&self) -> Option<&str> {
        non_blank(self.near.as_deref())
    }
}

/// Whitespace-only fields count as absent, so a blank form leads back to the intro.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Resolves the typed location and redirects to the shareable homepage URL.
///
/// An unresolved location still redirects with `near` set; the homepage then
/// shows the location-not-found message.
pub async fn submit_search(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Redirect {
    let config = state.config.snapshot();
    let coords = form.location().and_then(|near| state.geocoder.resolve(near));
    debug!(q = ?form.text(), near = ?form.location(), ?coords, "Search form submitted");

    let mut controller = HomepageController::new(&config, RedirectNavigator::default());
    controller.on_search_submitted(form.text(), form.location(), coords);

    let (_, navigator) = controller.into_parts();
    navigator.into_redirect()
}
