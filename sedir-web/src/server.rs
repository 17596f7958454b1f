//! HTTP server for the directory homepage
//!
//! Pages are rendered on the server; the only state that survives a request
//! is the search encoded in the URL.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use sedir_core::SharedConfig;
use sedir_search::{DirectorySearchService, GazetteerGeocoder, Geocoder};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::errors::WebError;
use crate::handlers::{health, submit_search};
use crate::pages::{apply_page, enterprise_page, homepage, privacy_page};

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: SharedConfig,
    pub search_service: DirectorySearchService,
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    /// Creates state with a geocoder over the configured places.
    pub fn new(config: SharedConfig, search_service: DirectorySearchService) -> Self {
        let geocoder = GazetteerGeocoder::from_places(&config.snapshot().places);
        Self {
            config,
            search_service,
            geocoder: Arc::new(geocoder),
        }
    }

    pub fn with_geocoder<G>(mut self, geocoder: G) -> Self
    where
        G: Geocoder + 'static,
    {
        self.geocoder = Arc::new(geocoder);
        self
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(homepage))
        .route("/search", post(submit_search))
        .route("/enterprise/{id}", get(enterprise_page))
        .route("/apply", get(apply_page))
        .route("/privacy", get(privacy_page))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the directory on `addr` until the process is stopped.
///
/// # Errors
/// - `WebError::Bind` - The listener could not be bound
/// - `WebError::Serve` - The server stopped with an I/O error
pub async fn run_server(state: AppState, addr: SocketAddr) -> Result<(), WebError> {
    let loaded = state.config.is_loaded();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| WebError::Bind { addr, source })?;

    info!(%addr, api_root_configured = loaded, "Directory server running on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
