//! Mock provider implementation for testing.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::DirectorySearchProvider;
use crate::errors::SearchError;
use crate::types::{Enterprise, SearchRequest};

/// Mock provider returning canned results and recording every request.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    results: Vec<Enterprise>,
    fail: bool,
    calls: Arc<Mutex<Vec<(String, SearchRequest)>>>,
    fetches: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockProvider {
    /// Creates a mock that returns `results` for every search.
    pub fn new(results: Vec<Enterprise>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }

    /// Creates a mock whose searches always fail.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Requests received so far, with the API root they were made against.
    pub fn calls(&self) -> Vec<(String, SearchRequest)> {
        self.calls.lock().clone()
    }

    /// Ids looked up so far, with the API root they were looked up against.
    pub fn fetches(&self) -> Vec<(String, String)> {
        self.fetches.lock().clone()
    }
}

#[async_trait]
impl DirectorySearchProvider for MockProvider {
    async fn search(
        &self,
        api_root: &str,
        request: &SearchRequest,
    ) -> Result<Vec<Enterprise>, SearchError> {
        self.calls
            .lock()
            .push((api_root.to_string(), request.clone()));

        if self.fail {
            return Err(SearchError::Provider {
                reason: "mock provider configured to fail".to_string(),
            });
        }
        Ok(self.results.clone())
    }

    async fn fetch(&self, api_root: &str, id: &str) -> Result<Option<Enterprise>, SearchError> {
        self.fetches
            .lock()
            .push((api_root.to_string(), id.to_string()));

        if self.fail {
            return Err(SearchError::Provider {
                reason: "mock provider configured to fail".to_string(),
            });
        }
        Ok(self.results.iter().find(|e| e.id == id).cloned())
    }
}
