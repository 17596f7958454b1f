//! Full page handlers
//!
//! Pages compose components into complete HTML responses.

pub mod enterprise;
pub mod homepage;
pub mod info;

// Re-export page handlers
pub use enterprise::{EnterpriseView, enterprise_page, render_enterprise};
pub use homepage::{homepage, render_homepage};
pub use info::{apply_page, privacy_page};
