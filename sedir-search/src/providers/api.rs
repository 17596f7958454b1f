//! Search provider backed by the directory's HTTP search API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::DirectorySearchProvider;
use crate::errors::SearchError;
use crate::types::{Enterprise, SearchRequest};

/// Queries `{api_root}/search` with the homepage's `q`, `near` and `at` parameters,
/// and `{api_root}/enterprise/{id}` for a single listing.
#[derive(Debug, Clone)]
pub struct ApiSearchProvider {
    client: reqwest::Client,
}

/// Search endpoint payload: either a bare list or wrapped in `results`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiResponse {
    Wrapped { results: Vec<Enterprise> },
    Bare(Vec<Enterprise>),
}

impl ApiResponse {
    fn into_enterprises(self) -> Vec<Enterprise> {
        match self {
            ApiResponse::Wrapped { results } => results,
            ApiResponse::Bare(results) => results,
        }
    }
}

impl ApiSearchProvider {
    /// Create a provider whose requests time out after `timeout`.
    ///
    /// # Errors
    /// - `SearchError::Network` - The HTTP client could not be built
    pub fn new(timeout: Duration) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sedir/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SearchError::Network {
                reason: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    /// Builds the search URL for `request` under `api_root`.
    ///
    /// # Errors
    /// - `SearchError::InvalidApiRoot` - `api_root` is not an absolute URL
    pub fn search_url(api_root: &str, request: &SearchRequest) -> Result<Url, SearchError> {
        let base = format!("{}/search", api_root.trim_end_matches('/'));
        let mut url = Url::parse(&base).map_err(|e| SearchError::InvalidApiRoot {
            api_root: api_root.to_string(),
            reason: e.to_string(),
        })?;

        if request.text.is_some() || request.coords.is_some() || request.location.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(text) = &request.text {
                pairs.append_pair("q", text);
            }
            if let Some(coords) = &request.coords {
                pairs.append_pair("at", coords.as_str());
            }
            if let Some(location) = &request.location {
                pairs.append_pair("near", location);
            }
        }

        Ok(url)
    }

    /// Builds the URL of enterprise `id` under `api_root`. The id is a single
    /// path segment, percent-encoded.
    ///
    /// # Errors
    /// - `SearchError::InvalidApiRoot` - `api_root` is not an absolute URL
    pub fn enterprise_url(api_root: &str, id: &str) -> Result<Url, SearchError> {
        let invalid = |reason: String| SearchError::InvalidApiRoot {
            api_root: api_root.to_string(),
            reason,
        };

        let mut url = Url::parse(api_root).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("cannot be a base URL".to_string()))?
            .pop_if_empty()
            .push("enterprise")
            .push(id);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, SearchError> {
        debug!(%url, "Querying search API");
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Network {
                reason: format!("Search request failed: {e}"),
            })
    }
}

#[async_trait]
impl DirectorySearchProvider for ApiSearchProvider {
    async fn search(
        &self,
        api_root: &str,
        request: &SearchRequest,
    ) -> Result<Vec<Enterprise>, SearchError> {
        let response = self.get(Self::search_url(api_root, request)?).await?;

        if !response.status().is_success() {
            return Err(SearchError::Status {
                status: response.status().as_u16(),
            });
        }

        let body: ApiResponse = response.json().await.map_err(|e| SearchError::Parse {
            reason: format!("Search response was not valid JSON: {e}"),
        })?;

        Ok(body.into_enterprises())
    }

    async fn fetch(&self, api_root: &str, id: &str) -> Result<Option<Enterprise>, SearchError> {
        let response = self.get(Self::enterprise_url(api_root, id)?).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(SearchError::Status {
                status: response.status().as_u16(),
            });
        }

        let enterprise = response.json().await.map_err(|e| SearchError::Parse {
            reason: format!("Enterprise response was not valid JSON: {e}"),
        })?;
        Ok(Some(enterprise))
    }
}
