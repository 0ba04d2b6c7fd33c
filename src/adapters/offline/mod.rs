//! Offline adapters used when no backend is configured.
//!
//! Reads succeed with empty results so browsing pages still render; writes
//! fail with `BACKEND_UNAVAILABLE`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::journal::CoffeeEntry;
use crate::domain::profile::Profile;
use crate::ports::{
    CoffeeEntryRepository, PhotoStorage, PhotoUpload, ProfileRepository, StorageError,
    StoredPhoto,
};

/// Stand-in for every data port while running without a backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineBackend;

#[async_trait]
impl CoffeeEntryRepository for OfflineBackend {
    async fn save(&self, _entry: &CoffeeEntry) -> Result<(), DomainError> {
        tracing::warn!("Rejecting coffee entry: backend not configured");
        Err(DomainError::backend_unavailable())
    }

    async fn find_by_user(&self, _user_id: &UserId) -> Result<Vec<CoffeeEntry>, DomainError> {
        Ok(Vec::new())
    }

    async fn find_all(&self) -> Result<Vec<CoffeeEntry>, DomainError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl ProfileRepository for OfflineBackend {
    async fn ensure_exists(
        &self,
        _user_id: &UserId,
        _email: Option<&str>,
    ) -> Result<(), DomainError> {
        Err(DomainError::backend_unavailable())
    }

    async fn find(&self, _user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        Ok(None)
    }

    async fn set_picture_url(&self, _user_id: &UserId, _url: &str) -> Result<(), DomainError> {
        Err(DomainError::backend_unavailable())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(0)
    }
}

#[async_trait]
impl PhotoStorage for OfflineBackend {
    async fn upload(&self, _upload: &PhotoUpload) -> Result<StoredPhoto, StorageError> {
        tracing::warn!("Rejecting photo upload: storage not configured");
        Err(StorageError::NotConfigured)
    }
}
