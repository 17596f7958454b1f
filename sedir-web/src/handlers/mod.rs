//! HTTP request handlers organized by functionality

pub mod health;
pub mod search;

// Re-export handler functions
pub use health::{Health, health};
pub use search::{SearchForm, submit_search};
