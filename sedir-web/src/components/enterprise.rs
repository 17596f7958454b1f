//! A single enterprise: detail view, links and lookup failures.

use maud::{Markup, html};
use sedir_search::Enterprise;
use url::{Url, form_urlencoded};

/// Path of the detail page for enterprise `id`.
pub fn enterprise_path(id: &str) -> String {
    // form encoding turns spaces into '+', which a path would keep literally
    let segment: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("/enterprise/{}", segment.replace('+', "%20"))
}

/// Parses `website` when it is an `http` or `https` URL.
pub fn safe_website(website: &str) -> Option<Url> {
    Url::parse(website)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

/// Link to an enterprise website; anything but http(s) renders as plain text.
pub fn website_link(website: &str) -> Markup {
    html! {
        @if let Some(url) = safe_website(website) {
            a href=(url) class="text-emerald-700 underline" rel="noopener" { (website) }
        } @else {
            span { (website) }
        }
    }
}

/// Full listing for one enterprise.
pub fn enterprise_details(enterprise: &Enterprise) -> Markup {
    html! {
        article class="enterprise-details" data-id=(enterprise.id) {
            h1 class="text-3xl font-bold mb-4" { (enterprise.name) }
            @if let Some(description) = &enterprise.description {
                p class="description text-gray-700 mb-4" { (description) }
            }
            dl class="space-y-2 text-sm" {
                @if let Some(address) = &enterprise.address {
                    dt class="font-semibold" { "Address" }
                    dd class="address" { (address) }
                }
                @if let Some(website) = &enterprise.website {
                    dt class="font-semibold" { "Website" }
                    dd class="website" { (website_link(website)) }
                }
            }
            p class="mt-8" {
                a href="/" class="text-emerald-700 underline" { "Back to the directory" }
            }
        }
    }
}

/// Message for an id the directory does not list.
pub fn enterprise_not_found(id: &str) -> Markup {
    html! {
        div class="enterprise-not-found" {
            p { "No social enterprise is listed under \"" (id) "\"." }
            p { a href="/" class="underline" { "Search the directory" } }
        }
    }
}

/// Shown while no API root is configured.
pub fn directory_unavailable() -> Markup {
    html! {
        div class="directory-unavailable" {
            p { "The directory is not available yet. Please try again shortly." }
        }
    }
}
