//! Static pages linked from the intro: applying to be listed, privacy policy

use axum::response::Html;
use maud::html;

use crate::components::{card, page, page_header};

/// Renders the page explaining how to be added to the directory.
pub async fn apply_page() -> Html<String> {
    let content = html! {
        (page_header("Join the directory", Some("List your social enterprise so buyers can find you")))
        (card(Some("Who can apply"), html! {
            p {
                "Any organisation in the Ottawa region that sells goods or services to "
                "achieve a social, cultural or environmental purpose."
            }
        }))
        (card(Some("How to apply"), html! {
            p {
                "Contact "
                a href="http://csedottawa.ca/" class="underline" { "CSED" }
                " with your enterprise's name, address, website and a short description."
            }
        }))
    };

    Html(page("Apply", content).into_string())
}

/// Renders the privacy policy.
pub async fn privacy_page() -> Html<String> {
    let content = html! {
        (page_header("Privacy policy", None))
        (card(None, html! {
            p class="mb-3" {
                "Searches are carried in the page address so they can be shared. "
                "We do not keep accounts or set tracking cookies."
            }
            p {
                "Locations you type are matched against a list of known places "
                "and are not stored."
            }
        }))
    };

    Html(page("Privacy policy", content).into_string())
}
