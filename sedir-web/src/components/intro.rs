//! Welcome content shown before any search.

use maud::{Markup, PreEscaped, html};

/// Title and tagline.
pub fn intro() -> Markup {
    html! {
        div class="intro js-intro text-center mb-8" {
            h1 class="title text-4xl font-bold" { "Ottawa's Social Enterprise Directory" }
            p class="tagline text-gray-600 mt-3" {
                "Find goods and services from the city's vibrant social enterprises."
            }
        }
    }
}

/// Links shown under the search form on the intro view.
pub fn intro_links() -> Markup {
    html! {
        div class="intro-links text-center text-sm text-gray-600 space-y-2 mt-8" {
            p class="apply" {
                "If you are a social enterprise that would like to be added to our directory click"
                (PreEscaped("&nbsp;"))
                a href="/apply" class="text-emerald-700 underline" { "here" }
                "."
            }
            p class="rhok" {
                "This site is a project created at"
                (PreEscaped("&nbsp;"))
                a href="https://rhok.ca/projects/ottawa-social-enterprise-marketplace" class="underline" {
                    "Random Hacks of Kindness"
                }
            }
            p class="powered_by" {
                "Powered by"
                (PreEscaped("&nbsp;"))
                a href="http://csedottawa.ca/" class="underline" { "CSED" }
                " |"
                (PreEscaped("&nbsp;"))
                a href="http://csedottawa.ca/" class="underline" { "Connect" }
                " with us for more info on social purchasing."
            }
            p class="privacy-policy" {
                a href="/privacy" class="underline" { "Privacy policy" }
            }
        }
    }
}
