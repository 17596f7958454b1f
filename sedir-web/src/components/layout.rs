//! Layout components - page shell, headers, cards

use maud::{DOCTYPE, Markup, html};

/// Renders a full HTML page around `content`.
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="bg-white text-gray-900 min-h-screen font-sans" {
                (nav_bar())
                main class="max-w-4xl mx-auto px-4 py-8" {
                    (content)
                }
            }
        }
    }
}

/// Renders the top navigation bar.
pub fn nav_bar() -> Markup {
    html! {
        nav class="border-b border-gray-200" {
            div class="max-w-4xl mx-auto px-4 h-14 flex items-center justify-between" {
                a href="/" class="text-xl font-bold text-emerald-700" { "Social Enterprise Directory" }
                div class="flex space-x-4 text-sm" {
                    a href="/apply" class="text-gray-600 hover:text-emerald-700" { "Apply" }
                    a href="/privacy" class="text-gray-600 hover:text-emerald-700" { "Privacy" }
                }
            }
        }
    }
}

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> Markup {
    html! {
        div class="mb-8" {
            h1 class="text-3xl font-bold" { (title) }
            @if let Some(subtitle) = subtitle {
                p class="text-gray-600 mt-2" { (subtitle) }
            }
        }
    }
}

/// Renders a card container with an optional heading.
pub fn card(title: Option<&str>, content: Markup) -> Markup {
    html! {
        div class="border border-gray-200 rounded-lg p-6 mb-6" {
            @if let Some(title) = title {
                h3 class="text-lg font-semibold mb-4" { (title) }
            }
            (content)
        }
    }
}
