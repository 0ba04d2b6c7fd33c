//! Photo Storage Port - object storage for entry photos.
//!
//! Photos are uploaded under a per-user prefix and served from a public URL
//! that is then attached to a coffee entry as `photo_url`.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};

/// Content types accepted for upload.
pub const ALLOWED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/heic"];

/// Default upload limit: 5 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

const DEFAULT_EXTENSION: &str = "jpg";

/// Folder that holds avatars inside the avatar bucket.
pub const AVATAR_PREFIX: &str = "profile-pictures";

/// Port for storing entry photos and avatars.
///
/// # Contract
///
/// Implementations must:
/// - Never overwrite an existing object unless `upsert` is set
/// - Return a URL that can be fetched without credentials
#[async_trait]
pub trait PhotoStorage: Send + Sync {
    /// Upload a photo at `upload.object_path` and return where it landed.
    async fn upload(&self, upload: &PhotoUpload) -> Result<StoredPhoto, StorageError>;
}

/// A photo ready to be sent to storage.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoUpload {
    pub object_path: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    /// Replace an existing object at the same path.
    pub upsert: bool,
}

impl PhotoUpload {
    /// Checks type and size and assigns a unique object path under the user's prefix.
    ///
    /// The path is `{user_id}/{unix_millis}-{random}.{ext}`, with the extension
    /// taken from the original file name.
    pub fn prepare(
        user_id: &UserId,
        file_name: Option<&str>,
        content_type: &str,
        bytes: Vec<u8>,
        max_bytes: u64,
        now: Timestamp,
    ) -> Result<Self, StorageError> {
        check_image(content_type, &bytes, max_bytes)?;

        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(6).collect();
        let object_path = format!(
            "{}/{}-{}.{}",
            user_id,
            now.as_unix_millis(),
            suffix,
            extension(file_name)
        );

        Ok(Self {
            object_path,
            content_type: content_type.to_string(),
            bytes,
            upsert: false,
        })
    }

    /// Same checks as [`PhotoUpload::prepare`], for a profile picture.
    ///
    /// The path is `profile-pictures/{user_id}-{unix_millis}.{ext}` and the
    /// upload replaces any object already there.
    pub fn avatar(
        user_id: &UserId,
        file_name: Option<&str>,
        content_type: &str,
        bytes: Vec<u8>,
        max_bytes: u64,
        now: Timestamp,
    ) -> Result<Self, StorageError> {
        check_image(content_type, &bytes, max_bytes)?;

        Ok(Self {
            object_path: format!(
                "{}/{}-{}.{}",
                AVATAR_PREFIX,
                user_id,
                now.as_unix_millis(),
                extension(file_name)
            ),
            content_type: content_type.to_string(),
            bytes,
            upsert: true,
        })
    }
}

fn check_image(content_type: &str, bytes: &[u8], max_bytes: u64) -> Result<(), StorageError> {
    if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
        return Err(StorageError::unsupported_content_type(content_type));
    }
    let size = bytes.len() as u64;
    if size > max_bytes {
        return Err(StorageError::file_too_large(size, max_bytes));
    }
    Ok(())
}

fn extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// Where an uploaded photo was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPhoto {
    pub path: String,
    pub public_url: String,
}

/// Errors that can occur during photo storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Invalid file type '{content_type}'. Please upload a JPEG, PNG, WebP, or HEIC image.")]
    UnsupportedContentType { content_type: String },

    #[error("File too large: {size_bytes} bytes (max: {max_bytes})")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },

    /// Storage service answered with an error status.
    #[error("Storage rejected upload ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Storage service could not be reached.
    #[error("Storage request failed: {message}")]
    Request { message: String },

    /// No storage backend is configured.
    #[error("Photo storage is not configured")]
    NotConfigured,
}

impl StorageError {
    pub fn unsupported_content_type(content_type: impl Into<String>) -> Self {
        Self::UnsupportedContentType {
            content_type: content_type.into(),
        }
    }

    pub fn file_too_large(size_bytes: u64, max_bytes: u64) -> Self {
        Self::FileTooLarge {
            size_bytes,
            max_bytes,
        }
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        let code = match &err {
            StorageError::UnsupportedContentType { .. } => ErrorCode::UnsupportedMediaType,
            StorageError::FileTooLarge { .. } => ErrorCode::PayloadTooLarge,
            StorageError::NotConfigured => ErrorCode::BackendUnavailable,
            StorageError::Rejected { .. } | StorageError::Request { .. } => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
