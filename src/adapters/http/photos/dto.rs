//! HTTP DTOs for photo uploads.

use serde::Serialize;

use crate::ports::StoredPhoto;

/// Multipart field that carries the image.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    pub path: String,
}

impl From<StoredPhoto> for UploadResponse {
    fn from(photo: StoredPhoto) -> Self {
        Self {
            success: true,
            url: photo.public_url,
            path: photo.path,
        }
    }
}
