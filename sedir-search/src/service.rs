//! Directory search service used by the homepage results list.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::errors::SearchError;
use crate::providers::{ApiSearchProvider, DemoProvider, DirectorySearchProvider};
use crate::types::{Enterprise, SearchRequest};

/// Directory search service wrapping a shared provider.
#[derive(Debug, Clone)]
pub struct DirectorySearchService {
    provider: Arc<dyn DirectorySearchProvider>,
}

impl DirectorySearchService {
    /// Creates a service over `provider`.
    pub fn new<P>(provider: P) -> Self
    where
        P: DirectorySearchProvider + 'static,
    {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Creates a service querying the remote search API.
    ///
    /// # Errors
    /// - `SearchError::Network` - The HTTP client could not be built
    pub fn api(timeout: Duration) -> Result<Self, SearchError> {
        Ok(Self::new(ApiSearchProvider::new(timeout)?))
    }

    /// Creates a service over the built-in demo directory.
    pub fn demo() -> Self {
        Self::new(DemoProvider::new())
    }

    /// Search the directory under `api_root`.
    ///
    /// An empty request returns no results without calling the provider.
    ///
    /// # Errors
    /// - Any `SearchError` reported by the provider
    pub async fn search(
        &self,
        api_root: &str,
        request: &SearchRequest,
    ) -> Result<Vec<Enterprise>, SearchError> {
        if request.is_empty() {
            return Ok(Vec::new());
        }

        let results = self.provider.search(api_root, request).await?;
        debug!(
            text = ?request.text,
            location = ?request.location,
            count = results.len(),
            "Directory search completed"
        );
        Ok(results)
    }

    /// Like [`search`](Self::search), but logs failures and returns no results.
    pub async fn search_or_empty(&self, api_root: &str, request: &SearchRequest) -> Vec<Enterprise> {
        match self.search(api_root, request).await {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "Directory search failed, showing no results");
                Vec::new()
            }
        }
    }

    /// Look up enterprise `id` under `api_root`.
    ///
    /// # Errors
    /// - Any `SearchError` reported by the provider
    pub async fn fetch(&self, api_root: &str, id: &str) -> Result<Option<Enterprise>, SearchError> {
        let enterprise = self.provider.fetch(api_root, id).await?;
        debug!(id, found = enterprise.is_some(), "Enterprise lookup completed");
        Ok(enterprise)
    }

    /// Like [`fetch`](Self::fetch), but logs failures and reports the
    /// enterprise as not found.
    pub async fn fetch_or_none(&self, api_root: &str, id: &str) -> Option<Enterprise> {
        match self.fetch(api_root, id).await {
            Ok(enterprise) => enterprise,
            Err(e) => {
                warn!(error = %e, id, "Enterprise lookup failed, reporting not found");
                None
            }
        }
    }
}

impl Default for DirectorySearchService {
    fn default() -> Self {
        Self::demo()
    }
}
