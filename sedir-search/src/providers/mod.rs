//! Provider implementations for directory search.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::types::{Enterprise, SearchRequest};

pub mod api;
pub mod demo;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use api::ApiSearchProvider;
pub use demo::DemoProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockProvider;

/// Trait for directory search providers.
///
/// Implementations query a backend (the remote search API, built-in demo
/// data, or a mock in tests). `api_root` is the configured API root at the
/// time of the request; providers without a remote backend ignore it.
#[async_trait]
pub trait DirectorySearchProvider: Send + Sync + std::fmt::Debug {
    /// Search the directory.
    ///
    /// # Errors
    /// - `SearchError::InvalidApiRoot` - The API root is not a usable URL
    /// - `SearchError::Network` - Network connectivity issues
    /// - `SearchError::Status` - The backend answered with an error status
    /// - `SearchError::Parse` - The response could not be decoded
    /// - `SearchError::Provider` - Provider-specific error
    async fn search(
        &self,
        api_root: &str,
        request: &SearchRequest,
    ) -> Result<Vec<Enterprise>, SearchError>;

    /// Look up a single enterprise by id. `Ok(None)` means it is not listed.
    ///
    /// # Errors
    /// - `SearchError::InvalidApiRoot` - The API root is not a usable URL
    /// - `SearchError::Network` - Network connectivity issues
    /// - `SearchError::Status` - The backend answered with an error status
    /// - `SearchError::Parse` - The response could not be decoded
    /// - `SearchError::Provider` - Provider-specific error
    async fn fetch(&self, api_root: &str, id: &str) -> Result<Option<Enterprise>, SearchError>;
}
