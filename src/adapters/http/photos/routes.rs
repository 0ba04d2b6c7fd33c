//! HTTP routes for photo uploads.

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use super::handlers::{upload_photo, PhotoHandlers};

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Body limit for a multipart upload carrying at most `max_upload_bytes` of file.
pub fn upload_body_limit(max_upload_bytes: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES))
}

/// Creates the upload router, mounted at `/api/upload`.
///
/// Bodies past `max_upload_bytes` plus multipart overhead are cut off while
/// streaming; both paths answer 413 `PAYLOAD_TOO_LARGE`.
pub fn photo_routes(handlers: PhotoHandlers, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", post(upload_photo))
        .layer(upload_body_limit(max_upload_bytes))
        .with_state(handlers)
}
