//! Hosted object storage adapter for entry photos.
//!
//! Uploads go to `{base}/storage/v1/object/{bucket}/{path}` with the service
//! key; objects are then served from the bucket's public URL.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{PhotoStorage, PhotoUpload, StorageError, StoredPhoto};

/// Default bucket for entry photos.
pub const DEFAULT_BUCKET: &str = "coffee-photos";

/// Default bucket for profile pictures.
pub const DEFAULT_AVATAR_BUCKET: &str = "avatars";

/// Cache lifetime the storage CDN applies to served objects, in seconds.
const CACHE_CONTROL_SECS: &str = "3600";

/// Hosted storage configuration.
#[derive(Clone)]
pub struct SupabaseStorageConfig {
    /// Project base URL (e.g., "https://abcd.supabase.co").
    pub base_url: String,

    /// Service role key; never logged.
    pub service_key: SecretString,

    pub bucket: String,

    pub timeout: Duration,
}

impl SupabaseStorageConfig {
    pub fn new(base_url: impl Into<String>, service_key: SecretString) -> Self {
        Self {
            base_url: base_url.into(),
            service_key,
            bucket: DEFAULT_BUCKET.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    fn upload_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base(), self.bucket, path)
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.base(), self.bucket, path)
    }
}

/// `PhotoStorage` backed by the hosted storage REST API.
pub struct SupabasePhotoStorage {
    config: SupabaseStorageConfig,
    client: Client,
}

impl SupabasePhotoStorage {
    pub fn new(config: SupabaseStorageConfig) -> Result<Self, StorageError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StorageError::request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl PhotoStorage for SupabasePhotoStorage {
    async fn upload(&self, upload: &PhotoUpload) -> Result<StoredPhoto, StorageError> {
        let key = self.config.service_key.expose_secret();

        let response = self
            .client
            .post(self.config.upload_url(&upload.object_path))
            .bearer_auth(key)
            .header("apikey", key)
            .header("Content-Type", &upload.content_type)
            .header("x-upsert", if upload.upsert { "true" } else { "false" })
            .header("cache-control", format!("max-age={}", CACHE_CONTROL_SECS))
            .body(upload.bytes.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StorageError::request(format!(
                        "Upload timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    StorageError::request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                path = %upload.object_path,
                "Photo upload rejected: {}",
                body
            );
            return Err(StorageError::rejected(status.as_u16(), body));
        }

        tracing::info!(path = %upload.object_path, bytes = upload.bytes.len(), "Photo uploaded");

        Ok(StoredPhoto {
            path: upload.object_path.clone(),
            public_url: self.config.public_url(&upload.object_path),
        })
    }
}

impl std::fmt::Debug for SupabasePhotoStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabasePhotoStorage")
            .field("base_url", &self.config.base_url)
            .field("bucket", &self.config.bucket)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SupabaseStorageConfig {
        SupabaseStorageConfig::new(
            "https://abcd.supabase.co/",
            SecretString::new("service-key".to_string()),
        )
    }

    #[test]
    fn urls_use_bucket_and_trim_trailing_slash() {
        let config = config();
        assert_eq!(
            config.upload_url("u/1-abc.jpg"),
            "https://abcd.supabase.co/storage/v1/object/coffee-photos/u/1-abc.jpg"
        );
        assert_eq!(
            config.public_url("u/1-abc.jpg"),
            "https://abcd.supabase.co/storage/v1/object/public/coffee-photos/u/1-abc.jpg"
        );
    }

    #[test]
    fn custom_bucket_and_timeout() {
        let config = config()
            .with_bucket("mugs")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.bucket, "mugs");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.public_url("x.png").contains("/public/mugs/x.png"));
    }

    #[test]
    fn debug_hides_service_key() {
        let storage = SupabasePhotoStorage::new(config()).unwrap();
        assert!(!format!("{:?}", storage).contains("service-key"));
    }
}
