//! HTTP handlers for photo uploads.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::photos::{UploadPhotoCommand, UploadPhotoHandler};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{UploadResponse, FILE_FIELD};

#[derive(Clone)]
pub struct PhotoHandlers {
    upload_handler: Arc<UploadPhotoHandler>,
}

impl PhotoHandlers {
    pub fn new(upload_handler: Arc<UploadPhotoHandler>) -> Self {
        Self { upload_handler }
    }
}

/// The image part of a multipart upload.
#[derive(Debug)]
pub struct ImageFile {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Reads the `file` field, skipping any other fields.
pub async fn read_image(multipart: &mut Multipart) -> Result<ImageFile, DomainError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;

        return Ok(ImageFile {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(DomainError::validation(FILE_FIELD, "No file provided"))
}

/// POST /api/upload - Store one photo and return its public URL
pub async fn upload_photo(
    State(handlers): State<PhotoHandlers>,
    RequireAuth(user): RequireAuth,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let image = read_image(&mut multipart).await?;

    let cmd = UploadPhotoCommand {
        user_id: user.id,
        file_name: image.file_name,
        content_type: image.content_type,
        bytes: image.bytes,
    };
    let stored = handlers.upload_handler.handle(cmd).await?;

    Ok(Json(UploadResponse::from(stored)))
}

fn multipart_error(err: MultipartError) -> DomainError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        DomainError::new(ErrorCode::PayloadTooLarge, "Upload exceeds the size limit")
    } else {
        DomainError::validation(FILE_FIELD, err.body_text())
    }
}
