//! HTTP adapter for photo uploads.
//!
//! - `POST /api/upload` - Multipart form with a single `file` field

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{read_image, ImageFile, PhotoHandlers};
pub use routes::{photo_routes, upload_body_limit};
