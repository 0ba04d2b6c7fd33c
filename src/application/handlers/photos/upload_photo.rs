//! UploadPhotoHandler - Command handler for entry photo uploads.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::{PhotoStorage, PhotoUpload, StoredPhoto};

/// Command to store a photo for the signed-in user.
#[derive(Debug, Clone)]
pub struct UploadPhotoCommand {
    pub user_id: UserId,
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub struct UploadPhotoHandler {
    storage: Arc<dyn PhotoStorage>,
    max_bytes: u64,
}

impl UploadPhotoHandler {
    pub fn new(storage: Arc<dyn PhotoStorage>, max_bytes: u64) -> Self {
        Self { storage, max_bytes }
    }

    pub async fn handle(&self, cmd: UploadPhotoCommand) -> Result<StoredPhoto, DomainError> {
        let upload = PhotoUpload::prepare(
            &cmd.user_id,
            cmd.file_name.as_deref(),
            &cmd.content_type,
            cmd.bytes,
            self.max_bytes,
            Timestamp::now(),
        )?;

        let stored = self.storage.upload(&upload).await?;

        tracing::info!(user_id = %cmd.user_id, path = %stored.path, "Photo stored");
        Ok(stored)
    }
}
