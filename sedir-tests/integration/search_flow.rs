//! Form submissions redirect to shareable URLs that render the same search

use axum::http::StatusCode;

use crate::common::{app, body_text, get, location, post_form};

#[tokio::test]
async fn test_text_search_redirects() {
    let app = app();

    let response = post_form(&app.router, "/search", "q=bakery&near=").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?q=bakery");
}

#[tokio::test]
async fn test_known_place_adds_coordinates() {
    let app = app();

    let response = post_form(&app.router, "/search", "q=&near=Ottawa").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?at=45.4215%2C-75.6972&near=Ottawa");
}

#[tokio::test]
async fn test_unknown_place_round_trips_to_not_found() {
    let app = app();

    let response = post_form(&app.router, "/search", "q=bikes&near=Atlantis").await;
    let url = location(&response).to_string();
    assert_eq!(url, "/?q=bikes&near=Atlantis");

    let body = body_text(get(&app.router, &url).await).await;
    assert!(body.contains(r#"data-view="location-not-found""#));
    assert!(body.contains(r#"value="bikes""#));
}

#[tokio::test]
async fn test_blank_submission_returns_to_intro() {
    let app = app();

    let response = post_form(&app.router, "/search", "q=++&near=").await;
    assert_eq!(location(&response), "/");

    let body = body_text(get(&app.router, "/").await).await;
    assert!(body.contains(r#"data-view="intro""#));
}

#[tokio::test]
async fn test_special_characters_survive_redirect() {
    let app = app();

    let response = post_form(&app.router, "/search", "q=fair+%26+square").await;
    let url = location(&response).to_string();
    assert_eq!(url, "/?q=fair+%26+square");

    app_get_results(&app.router, &url).await;
    let calls = app.provider.calls();
    assert_eq!(calls[0].1.text.as_deref(), Some("fair & square"));
}

async fn app_get_results(router: &axum::Router, url: &str) {
    let body = body_text(get(router, url).await).await;
    assert!(body.contains(r#"data-view="results""#));
}
