//! The search form: free text plus an optional location.

use maud::{Markup, html};

/// Renders the search form, pre-filled with the current search.
///
/// Submits `q` and `near` to `POST /search`; the server resolves the
/// location and redirects to the shareable homepage URL.
pub fn search_form(search_text: Option<&str>, search_location: Option<&str>) -> Markup {
    html! {
        form class="search-form flex flex-col md:flex-row gap-3" method="post" action="/search" {
            input type="search" name="q" placeholder="What are you looking for?"
                value=(search_text.unwrap_or_default())
                class="flex-1 px-4 py-2 border border-gray-300 rounded-lg";
            input type="text" name="near" placeholder="Location or postal code"
                value=(search_location.unwrap_or_default())
                class="md:w-64 px-4 py-2 border border-gray-300 rounded-lg";
            button type="submit" class="px-4 py-2 bg-emerald-700 text-white rounded-lg" { "Search" }
        }
    }
}
