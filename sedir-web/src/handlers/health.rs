//! Liveness endpoint

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::server::AppState;

/// Health report. `config_loaded` is false until an API root is configured.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub config_loaded: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        config_loaded: state.config.is_loaded(),
    })
}
