//! Result list and the location-not-found message.

use maud::{Markup, html};
use sedir_core::SearchQueryState;
use sedir_search::Enterprise;

use super::enterprise::{enterprise_path, website_link};

/// Renders the results for the current search.
pub fn search_results(state: &SearchQueryState, enterprises: &[Enterprise]) -> Markup {
    let origin = state.search_coords.as_ref().and_then(|c| c.lat_lon());

    html! {
        div class="search-results" {
            h2 class="text-xl font-semibold mb-4" { (summary(state, enterprises.len())) }
            @if enterprises.is_empty() {
                p class="no-results text-gray-600" {
                    "No social enterprises matched your search. Try different words or a nearby location."
                }
            } @else {
                ul class="space-y-4" {
                    @for enterprise in enterprises {
                        li { (enterprise_card(enterprise, origin)) }
                    }
                }
            }
        }
    }
}

fn summary(state: &SearchQueryState, count: usize) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    match (&state.search_text, &state.search_location_text) {
        (Some(text), Some(location)) => format!("{count} {noun} for \"{text}\" near {location}"),
        (Some(text), None) => format!("{count} {noun} for \"{text}\""),
        (None, Some(location)) => format!("{count} {noun} near {location}"),
        (None, None) => format!("{count} {noun}"),
    }
}

/// Renders a single enterprise, with its distance from `origin` when known.
pub fn enterprise_card(enterprise: &Enterprise, origin: Option<(f64, f64)>) -> Markup {
    let distance = origin.and_then(|(lat, lon)| enterprise.distance_km(lat, lon));

    html! {
        div class="enterprise border border-gray-200 rounded-lg p-4" data-id=(enterprise.id) {
            div class="flex items-baseline justify-between" {
                h3 class="text-lg font-semibold" {
                    a href=(enterprise_path(&enterprise.id)) class="text-emerald-700 underline" {
                        (enterprise.name)
                    }
                }
                @if let Some(km) = distance {
                    span class="distance text-sm text-gray-500" { (format!("{km:.1} km")) }
                }
            }
            @if let Some(description) = &enterprise.description {
                p class="text-gray-700 mt-1" { (description) }
            }
            @if let Some(address) = &enterprise.address {
                p class="address text-sm text-gray-500 mt-1" { (address) }
            }
            @if let Some(website) = &enterprise.website {
                p class="website text-sm mt-1" { (website_link(website)) }
            }
        }
    }
}

/// Message shown when the typed location could not be resolved.
pub fn location_not_found(location_text: &str) -> Markup {
    html! {
        div class="location-not-found" {
            p { "Could not find a match for location or postal code \"" (location_text) "\"" }
            p { "Please try searching again." }
        }
    }
}

#[cfg(test)]
mod tests {
    use sedir_core::Coordinates;

    use super::*;

    fn bakery() -> Enterprise {
        Enterprise {
            id: "riverside-bakery".to_string(),
            name: "Riverside <Bakery>".to_string(),
            description: Some("Bread".to_string()),
            address: None,
            website: Some("https://bakery.example.org".to_string()),
            lat: Some(45.4275),
            lon: Some(-75.69),
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
    fn test_results_list() {
        let markup = search_results(&state(Some("bread"), None, None), &[bakery()]).into_string();

        assert!(markup.contains("1 result for &quot;bread&quot;"));
        assert!(markup.contains("Riverside &lt;Bakery&gt;"));
        assert!(markup.contains(r#"href="https://bakery.example.org/""#));
        assert!(markup.contains(r#"href="/enterprise/riverside-bakery""#));
        assert!(!markup.contains("km</span>"));
    }

    #[test]
    fn test_script_website_is_not_linked() {
        let enterprise = Enterprise {
            website: Some("javascript:alert(document.cookie)".to_string()),
            ..bakery()
        };

        let markup = enterprise_card(&enterprise, None).into_string();

        assert!(!markup.contains(r#"href="javascript:"#));
        assert!(markup.contains("javascript:alert(document.cookie)"));
    }

    #[test]
    fn test_distance_shown_with_coordinates() {
        let markup = search_results(
            &state(None, Some("Ottawa"), Some("45.4215,-75.6972")),
            &[bakery()],
        )
        .into_string();

        assert!(markup.contains("1 result near Ottawa"));
        assert!(markup.contains("km</span>"));
    }

    #[test]
    fn test_empty_results() {
        let markup = search_results(&state(Some("submarines"), None, None), &[]).into_string();

        assert!(markup.contains("0 results for"));
        assert!(markup.contains("No social enterprises matched your search."));
    }

    #[test]
    fn test_location_not_found_escapes_input() {
        let markup = location_not_found("<script>").into_string();

        assert!(markup.contains(
            "Could not find a match for location or postal code &quot;&lt;script&gt;&quot;"
        ));
        assert!(markup.contains("Please try searching again."));
    }
}
