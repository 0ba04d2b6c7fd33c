//! HTTP routes for profile endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::photos::upload_body_limit;

use super::handlers::{get_profile, upload_picture, ProfileHandlers};

/// Creates the profile router, mounted at `/api/profile`.
pub fn profile_routes(handlers: ProfileHandlers, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(get_profile))
        .route(
            "/picture",
            post(upload_picture).layer(upload_body_limit(max_upload_bytes)),
        )
        .with_state(handlers)
}
