//! Integration tests for the directory
//!
//! These tests drive the HTTP router end to end: a search submitted through
//! the form becomes a shareable URL, and loading that URL renders the
//! matching view of the homepage.

#[path = "integration/common.rs"]
mod common;

#[path = "integration/enterprise_page.rs"]
mod enterprise_page;
#[path = "integration/homepage_views.rs"]
mod homepage_views;
#[path = "integration/search_flow.rs"]
mod search_flow;
#[path = "integration/config_loading.rs"]
mod config_loading;
