//! HTTP handlers for the catalog endpoint.

use axum::Json;

use super::dto::CatalogResponse;

/// GET /api/catalog - Public, no authentication
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse::build())
}
