//! UploadProfilePictureHandler - Command handler for avatar uploads.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, DomainError, Timestamp};
use crate::ports::{PhotoStorage, PhotoUpload, ProfileRepository, StoredPhoto};

/// Command to replace the signed-in user's profile picture.
#[derive(Debug, Clone)]
pub struct UploadProfilePictureCommand {
    pub user: AuthenticatedUser,
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Stores the avatar, then points the profile at its public URL.
pub struct UploadProfilePictureHandler {
    avatars: Arc<dyn PhotoStorage>,
    profiles: Arc<dyn ProfileRepository>,
    max_bytes: u64,
}

impl UploadProfilePictureHandler {
    pub fn new(
        avatars: Arc<dyn PhotoStorage>,
        profiles: Arc<dyn ProfileRepository>,
        max_bytes: u64,
    ) -> Self {
        Self {
            avatars,
            profiles,
            max_bytes,
        }
    }

    pub async fn handle(&self, cmd: UploadProfilePictureCommand) -> Result<StoredPhoto, DomainError> {
        // 1. Validate before touching storage
        let upload = PhotoUpload::avatar(
            &cmd.user.id,
            cmd.file_name.as_deref(),
            &cmd.content_type,
            cmd.bytes,
            self.max_bytes,
            Timestamp::now(),
        )?;

        // 2. Profile row must exist to hold the URL
        self.profiles
            .ensure_exists(&cmd.user.id, cmd.user.email.as_deref())
            .await?;

        // 3. Upload, then record the URL
        let stored = self.avatars.upload(&upload).await?;
        self.profiles
            .set_picture_url(&cmd.user.id, &stored.public_url)
            .await?;

        tracing::info!(user_id = %cmd.user.id, path = %stored.path, "Profile picture updated");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryPhotoStorage, InMemoryProfileRepository};
    use crate::adapters::offline::OfflineBackend;
    use crate::domain::foundation::{ErrorCode, UserId};
    use crate::ports::DEFAULT_MAX_UPLOAD_BYTES;

    fn command(content_type: &str, len: usize) -> UploadProfilePictureCommand {
        UploadProfilePictureCommand {
            user: AuthenticatedUser::new(UserId::new("user-1").unwrap(), None),
            file_name: Some("me.png".to_string()),
            content_type: content_type.to_string(),
            bytes: vec![3u8; len],
        }
    }

    #[tokio::test]
    async fn stores_avatar_and_updates_profile() {
        let avatars = InMemoryPhotoStorage::new("https://cdn.test/avatars");
        let profiles = InMemoryProfileRepository::new();
        let handler = UploadProfilePictureHandler::new(
            Arc::new(avatars.clone()),
            Arc::new(profiles.clone()),
            DEFAULT_MAX_UPLOAD_BYTES,
        );

        let stored = handler.handle(command("image/png", 8)).await.unwrap();

        assert!(stored.path.starts_with("profile-pictures/user-1-"));
        assert!(stored.path.ends_with(".png"));
        assert!(avatars.get(&stored.path).await.is_some());
        let profile = profiles
            .find(&UserId::new("user-1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.profile_picture_url, Some(stored.public_url));
    }

    #[tokio::test]
    async fn invalid_file_touches_nothing() {
        let profiles = InMemoryProfileRepository::new();
        let handler = UploadProfilePictureHandler::new(
            Arc::new(InMemoryPhotoStorage::default()),
            Arc::new(profiles.clone()),
            DEFAULT_MAX_UPLOAD_BYTES,
        );

        let err = handler.handle(command("text/plain", 8)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::UnsupportedMediaType);
        assert_eq!(profiles.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn offline_backend_is_unavailable() {
        let handler = UploadProfilePictureHandler::new(
            Arc::new(OfflineBackend),
            Arc::new(OfflineBackend),
            DEFAULT_MAX_UPLOAD_BYTES,
        );

        let err = handler.handle(command("image/jpeg", 8)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::BackendUnavailable);
    }
}
