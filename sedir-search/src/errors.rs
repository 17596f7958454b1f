//! Error types for directory search.

use thiserror::Error;

/// Errors that can occur while fetching search results.
///
/// The homepage never shows these to users; they are logged and the results
/// list renders empty.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The configured API root is not a usable base URL.
    #[error("Invalid API root '{api_root}': {reason}")]
    InvalidApiRoot {
        /// The configured API root
        api_root: String,
        /// Why it could not be used
        reason: String,
    },

    /// Network communication error occurred during search.
    #[error("Network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// The search API answered with a non-success status.
    #[error("Search API returned HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Failed to parse the search response.
    #[error("Parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },

    /// Search provider returned an error or is unavailable.
    #[error("Provider error: {reason}")]
    Provider {
        /// The reason for the provider error
        reason: String,
    },
}
