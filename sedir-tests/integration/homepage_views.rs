//! The homepage renders the branch selected from its URL

use axum::http::StatusCode;
use sedir_core::SiteConfig;

use crate::common::{API_ROOT, app, app_with, body_text, get};

#[tokio::test]
async fn test_blank_url_shows_intro() {
    let app = app();

    let response = get(&app.router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(r#"data-view="intro""#));
    assert!(body.contains("Ottawa's Social Enterprise Directory"));
    assert!(app.provider.calls().is_empty());
}

#[tokio::test]
async fn test_text_search_shows_results() {
    let app = app();

    let body = body_text(get(&app.router, "/?q=bakery").await).await;

    assert!(body.contains(r#"data-view="results""#));
    assert!(body.contains("Riverside Bakery"));
    assert!(body.contains(r#"value="bakery""#));

    let calls = app.provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, API_ROOT);
    assert_eq!(calls[0].1.text.as_deref(), Some("bakery"));
}

#[tokio::test]
async fn test_unresolved_location_shows_not_found() {
    let app = app();

    let body = body_text(get(&app.router, "/?near=Atlantis").await).await;

    assert!(body.contains(r#"data-view="location-not-found""#));
    assert!(body.contains("Could not find a match for location or postal code"));
    assert!(body.contains("Atlantis"));
    assert!(app.provider.calls().is_empty());
}

#[tokio::test]
async fn test_resolved_location_shows_results() {
    let app = app();

    let body = body_text(get(&app.router, "/?at=45.4215%2C-75.6972&near=Ottawa").await).await;

    assert!(body.contains(r#"data-view="results""#));
    assert!(body.contains("near Ottawa"));
    let calls = app.provider.calls();
    assert_eq!(calls[0].1.lat_lon(), Some((45.4215, -75.6972)));
}

#[tokio::test]
async fn test_results_wait_for_api_root() {
    let app = app_with(SiteConfig::default().with_default_places());

    let body = body_text(get(&app.router, "/?q=bakery").await).await;
    assert!(body.contains(r#"data-view="empty""#));
    assert!(!body.contains("Riverside Bakery"));

    app.config.set_api_root(Some(API_ROOT.to_string()));

    let body = body_text(get(&app.router, "/?q=bakery").await).await;
    assert!(body.contains(r#"data-view="results""#));
    assert!(body.contains("Riverside Bakery"));
}

#[tokio::test]
async fn test_empty_values_count_as_absent() {
    let app = app();

    let body = body_text(get(&app.router, "/?q=&near=").await).await;

    assert!(body.contains(r#"data-view="intro""#));
}

#[tokio::test]
async fn test_static_pages() {
    let app = app();

    for uri in ["/apply", "/privacy"] {
        let response = get(&app.router, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_health_reports_config() {
    let app = app_with(SiteConfig::default());

    let body = body_text(get(&app.router, "/health").await).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["config_loaded"], false);

    app.config.set_api_root(Some(API_ROOT.to_string()));
    let body = body_text(get(&app.router, "/health").await).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["config_loaded"], true);
}
