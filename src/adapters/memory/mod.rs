//! In-memory adapters.
//!
//! Hold everything in process memory behind `tokio::sync::RwLock`. Used by
//! tests and by local demos that want writes to work without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::journal::CoffeeEntry;
use crate::domain::profile::Profile;
use crate::ports::{
    CoffeeEntryRepository, PhotoStorage, PhotoUpload, ProfileRepository, StorageError,
    StoredPhoto,
};

/// In-memory journal.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCoffeeEntryRepository {
    entries: Arc<RwLock<Vec<CoffeeEntry>>>,
}

impl InMemoryCoffeeEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-filled with entries.
    pub fn with_entries(entries: Vec<CoffeeEntry>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl CoffeeEntryRepository for InMemoryCoffeeEntryRepository {
    async fn save(&self, entry: &CoffeeEntry) -> Result<(), DomainError> {
        self.entries.write().await.push(entry.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<CoffeeEntry>, DomainError> {
        let mut mine: Vec<CoffeeEntry> = self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| &e.user_id == user_id)
            .cloned()
            .collect();
        // newest first; ties keep insertion order
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine)
    }

    async fn find_all(&self) -> Result<Vec<CoffeeEntry>, DomainError> {
        Ok(self.entries.read().await.clone())
    }
}

/// In-memory profile table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<UserId, Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contains(&self, user_id: &UserId) -> bool {
        self.profiles.read().await.contains_key(user_id)
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn ensure_exists(
        &self,
        user_id: &UserId,
        email: Option<&str>,
    ) -> Result<(), DomainError> {
        self.profiles
            .write()
            .await
            .entry(user_id.clone())
            .or_insert_with(|| Profile::new(user_id.clone(), email.map(String::from), Timestamp::now()));
        Ok(())
    }

    async fn find(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn set_picture_url(&self, user_id: &UserId, url: &str) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.get_mut(user_id).ok_or_else(|| {
            DomainError::new(ErrorCode::ProfileNotFound, format!("No profile for {}", user_id))
        })?;
        profile.profile_picture_url = Some(url.to_string());
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.profiles.read().await.len() as u64)
    }
}

/// Keeps uploaded bytes in memory and serves them from a fake base URL.
#[derive(Debug, Clone)]
pub struct InMemoryPhotoStorage {
    base_url: String,
    objects: Arc<RwLock<HashMap<String, PhotoUpload>>>,
}

impl InMemoryPhotoStorage {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, path: &str) -> Option<PhotoUpload> {
        self.objects.read().await.get(path).cloned()
    }
}

impl Default for InMemoryPhotoStorage {
    fn default() -> Self {
        Self::new("http://localhost/photos")
    }
}

#[async_trait]
impl PhotoStorage for InMemoryPhotoStorage {
    async fn upload(&self, upload: &PhotoUpload) -> Result<StoredPhoto, StorageError> {
        let mut objects = self.objects.write().await;
        if !upload.upsert && objects.contains_key(&upload.object_path) {
            return Err(StorageError::rejected(409, "The resource already exists"));
        }
        objects.insert(upload.object_path.clone(), upload.clone());
        Ok(StoredPhoto {
            path: upload.object_path.clone(),
            public_url: format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                upload.object_path
            ),
        })
    }
}
