//! HTTP routes for the catalog endpoint.

use axum::{routing::get, Router};

use super::handlers::get_catalog;

/// Creates the catalog router, mounted at `/api/catalog`.
pub fn catalog_routes() -> Router {
    Router::new().route("/", get(get_catalog))
}
