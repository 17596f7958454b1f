//! Reusable HTML components for the directory pages
//!
//! Components are server-rendered `maud` fragments composed into full pages.
//! Everything interpolated from the URL or the search backend is escaped.

pub mod enterprise;
pub mod intro;
pub mod layout;
pub mod search_form;
pub mod search_results;

// Re-export main component functions
pub use enterprise::{
    directory_unavailable, enterprise_details, enterprise_not_found, enterprise_path, website_link,
};
pub use intro::{intro, intro_links};
pub use layout::{card, page, page_header};
pub use search_form::search_form;
pub use search_results::{enterprise_card, location_not_found, search_results};
