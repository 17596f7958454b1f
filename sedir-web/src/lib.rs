//! Sedir Web - server-rendered homepage for the social enterprise directory
//!
//! Every homepage request mounts a [`sedir_core::HomepageController`] from
//! the request URL and renders the branch it selects. Search submissions go
//! through the same controller, whose navigation request becomes a redirect.

pub mod components;
pub mod errors;
pub mod handlers;
pub mod navigation;
pub mod pages;
pub mod server;

// Re-export main types
pub use errors::WebError;
pub use navigation::RedirectNavigator;
pub use server::{AppState, router, run_server};
