//! Turns controller navigation requests into HTTP redirects.

use axum::response::Redirect;
use sedir_core::{HOMEPAGE_PATH, NavigationTarget, Navigator};

/// Navigator that remembers the latest target so a handler can redirect to it.
#[derive(Debug, Clone, Default)]
pub struct RedirectNavigator {
    target: Option<NavigationTarget>,
}

impl RedirectNavigator {
    pub fn target(&self) -> Option<&NavigationTarget> {
        self.target.as_ref()
    }

    /// URL of the requested navigation, or the homepage when none was made.
    pub fn location(&self) -> String {
        self.target
            .as_ref()
            .map_or_else(|| HOMEPAGE_PATH.to_string(), NavigationTarget::to_url)
    }

    /// `303 See Other` to [`location`](Self::location).
    pub fn into_redirect(self) -> Redirect {
        Redirect::to(&self.location())
    }
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, target: NavigationTarget) {
        self.target = Some(target);
    }
}
