//! Enterprise detail page

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use sedir_core::ConfigSource;
use sedir_search::Enterprise;
use tracing::debug;

use crate::components::{directory_unavailable, enterprise_details, enterprise_not_found, page};
use crate::server::AppState;

/// What the detail page shows for a requested id.
#[derive(Debug, Clone, PartialEq)]
pub enum EnterpriseView {
    /// No API root is configured yet.
    Unavailable,
    NotFound(String),
    Found(Enterprise),
}

impl EnterpriseView {
    fn status(&self) -> StatusCode {
        match self {
            EnterpriseView::NotFound(_) => StatusCode::NOT_FOUND,
            EnterpriseView::Unavailable | EnterpriseView::Found(_) => StatusCode::OK,
        }
    }
}

/// Renders `GET /enterprise/{id}`.
pub async fn enterprise_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    let config = state.config.snapshot();

    let view = match config.api_root() {
        None => EnterpriseView::Unavailable,
        Some(api_root) => {
            let found = state.search_service.fetch_or_none(api_root, &id).await;
            found.map_or(EnterpriseView::NotFound(id), EnterpriseView::Found)
        }
    };
    debug!(?view, "Rendering enterprise page");

    (view.status(), Html(render_enterprise(&view).into_string()))
}

pub fn render_enterprise(view: &EnterpriseView) -> Markup {
    match view {
        EnterpriseView::Unavailable => page("Social Enterprise Directory", directory_unavailable()),
        EnterpriseView::NotFound(id) => page("Enterprise not found", enterprise_not_found(id)),
        EnterpriseView::Found(enterprise) => page(&enterprise.name, enterprise_details(enterprise)),
    }
}

#[cfg(test)]
mod tests {
    use sedir_search::providers::demo::sample_directory;

    use super::*;

    #[test]
    fn test_found() {
        let enterprise = sample_directory().remove(0);
        let view = EnterpriseView::Found(enterprise.clone());

        let html = render_enterprise(&view).into_string();

        assert_eq!(view.status(), StatusCode::OK);
        assert!(html.contains(&format!("<title>{}</title>", enterprise.name)));
        assert!(html.contains("enterprise-details"));
    }

    #[test]
    fn test_not_found() {
        let view = EnterpriseView::NotFound("<nope>".to_string());

        let html = render_enterprise(&view).into_string();

        assert_eq!(view.status(), StatusCode::NOT_FOUND);
        assert!(html.contains("No social enterprise is listed under &quot;&lt;nope&gt;&quot;."));
    }

    #[test]
    fn test_unavailable() {
        let html = render_enterprise(&EnterpriseView::Unavailable).into_string();
        assert!(html.contains("directory-unavailable"));
        assert!(!html.contains("enterprise-details"));
    }
}
