//! Photo storage configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Hard ceiling on `max_upload_bytes`.
const UPLOAD_CEILING_BYTES: u64 = 50 * 1024 * 1024;

/// Hosted object storage settings. Without `url` and `service_key`, uploads
/// are refused.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Project base URL, e.g. `https://abcd.supabase.co`
    #[serde(default)]
    pub url: Option<String>,

    /// Service role key
    #[serde(default)]
    pub service_key: Option<SecretString>,

    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Bucket for profile pictures
    #[serde(default = "default_avatar_bucket")]
    pub avatar_bucket: String,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,

    /// Upload request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl StorageConfig {
    /// True when both the URL and key are present.
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.service_key.is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate storage configuration
    ///
    /// In production the storage URL must use HTTPS.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.url.is_some() != self.service_key.is_some() {
            return Err(ValidationError::IncompleteStorageConfig);
        }
        if self.max_upload_bytes == 0 || self.max_upload_bytes > UPLOAD_CEILING_BYTES {
            return Err(ValidationError::InvalidUploadLimit(UPLOAD_CEILING_BYTES));
        }
        if let Some(url) = &self.url {
            if *environment == Environment::Production && !url.starts_with("https://") {
                return Err(ValidationError::StorageUrlMustBeHttps);
            }
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: None,
            service_key: None,
            bucket: default_bucket(),
            avatar_bucket: default_avatar_bucket(),
            max_upload_bytes: default_max_upload_bytes(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_bucket() -> String {
    crate::adapters::storage::DEFAULT_BUCKET.to_string()
}

fn default_avatar_bucket() -> String {
    crate::adapters::storage::DEFAULT_AVATAR_BUCKET.to_string()
}

fn default_max_upload_bytes() -> u64 {
    crate::ports::DEFAULT_MAX_UPLOAD_BYTES
}

fn default_timeout() -> u64 {
    30
}
