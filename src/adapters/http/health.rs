//! Liveness endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::BackendMode;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend: BackendMode,
}

/// GET /health - Always 200 while the process is serving
pub async fn health_check(State(backend): State<BackendMode>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        backend,
    })
}
