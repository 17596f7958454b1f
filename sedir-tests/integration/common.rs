//! Shared helpers for router tests

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, header};
use sedir_core::{SharedConfig, SiteConfig};
use sedir_search::providers::demo::sample_directory;
use sedir_search::{DirectorySearchService, MockProvider};
use sedir_web::{AppState, router};
use tower::ServiceExt;

pub const API_ROOT: &str = "https://api.example.org";

pub struct TestApp {
    pub router: Router,
    pub config: SharedConfig,
    pub provider: MockProvider,
}

/// App with the API root configured and a mock returning the sample directory.
pub fn app() -> TestApp {
    let mut config = SiteConfig::default().with_default_places();
    config.api.api_root = Some(API_ROOT.to_string());
    app_with(config)
}

pub fn app_with(config: SiteConfig) -> TestApp {
    let provider = MockProvider::new(sample_directory());
    let config = SharedConfig::new(config);
    let state = AppState::new(config.clone(), DirectorySearchService::new(provider.clone()));
    TestApp {
        router: router(state),
        config,
        provider,
    }
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(router: &Router, uri: &str, form: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}
