//! Sedir Core - search state for the social enterprise directory
//!
//! The homepage keeps its current search in the URL so links can be shared.
//! This crate owns that contract: the query-parameter codec, the
//! [`HomepageController`] that reconciles page state with the URL, the pure
//! view selection, and the site configuration that gates result display.

pub mod config;
pub mod homepage;
pub mod query;
pub mod tracing_setup;
pub mod view;

// Re-export main types for convenient access
pub use config::{ApiConfig, PlaceConfig, ServerConfig, SharedConfig, SiteConfig};
pub use homepage::{
    ConfigSource, HOMEPAGE_PATH, HomepageController, Location, NavigationTarget, Navigator,
    RecordingNavigator, SearchQueryState,
};
pub use query::{Coordinates, QueryParams};
pub use view::{ViewKind, select_view, should_show_search_results};

/// Errors raised while setting up the directory.
///
/// Search state handling itself never fails: malformed URLs degrade to
/// absent fields. Only loading configuration from disk can go wrong.
#[derive(Debug, thiserror::Error)]
pub enum SedirError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SedirError {
    /// Returns a short message suitable for printing to an operator.
    pub fn user_message(&self) -> String {
        match self {
            SedirError::Configuration { reason } => format!("Configuration error: {reason}"),
            SedirError::ConfigParse(e) => format!("Configuration file is not valid JSON: {e}"),
            SedirError::Io(e) => format!("Could not read configuration: {e}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, SedirError>;
