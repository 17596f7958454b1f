//! Sedir Search - directory search and geocoding

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Backs the homepage results list: a [`DirectorySearchService`] queries a
//! [`DirectorySearchProvider`] (the remote search API, or built-in demo
//! data), and a [`Geocoder`] turns typed location text into coordinates.

pub mod errors;
pub mod geocoding;
pub mod providers;
pub mod service;
pub mod types;

// Re-export main types
pub use errors::SearchError;
pub use geocoding::{GazetteerGeocoder, Geocoder};
pub use providers::{ApiSearchProvider, DemoProvider, DirectorySearchProvider};
#[cfg(any(test, feature = "test-utils"))]
pub use providers::MockProvider;
pub use service::DirectorySearchService;
pub use types::{Enterprise, SearchRequest};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
