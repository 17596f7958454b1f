//! Result cards link to detail pages served behind the same API root gate

use axum::http::StatusCode;
use sedir_core::SiteConfig;

use crate::common::{API_ROOT, app, app_with, body_text, get};

#[tokio::test]
async fn test_result_card_links_to_detail_page() {
    let app = app();

    let results = body_text(get(&app.router, "/?q=bakery").await).await;
    assert!(results.contains(r#"href="/enterprise/riverside-bakery""#));

    let response = get(&app.router, "/enterprise/riverside-bakery").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Riverside Bakery"));
    assert!(body.contains("120 Rideau St, Ottawa"));
    assert_eq!(
        app.provider.fetches(),
        vec![(API_ROOT.to_string(), "riverside-bakery".to_string())]
    );
}

#[tokio::test]
async fn test_unknown_enterprise_is_not_found() {
    let app = app();

    let response = get(&app.router, "/enterprise/no-such-place").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_text(response).await;
    assert!(body.contains("No social enterprise is listed under"));
    assert!(body.contains("no-such-place"));
}

#[tokio::test]
async fn test_detail_page_waits_for_api_root() {
    let app = app_with(SiteConfig::default());

    let body = body_text(get(&app.router, "/enterprise/riverside-bakery").await).await;
    assert!(body.contains("directory-unavailable"));
    assert!(app.provider.fetches().is_empty());

    app.config.set_api_root(Some(API_ROOT.to_string()));

    let body = body_text(get(&app.router, "/enterprise/riverside-bakery").await).await;
    assert!(body.contains("enterprise-details"));
}
