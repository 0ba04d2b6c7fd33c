//! ProfileRepository port for the per-user profile row.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::Profile;

/// Repository for user profiles.
///
/// A profile row must exist before the user's first entry is stored.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Create the profile if missing; a no-op when it already exists.
    async fn ensure_exists(&self, user_id: &UserId, email: Option<&str>)
        -> Result<(), DomainError>;

    /// Load a profile, or `None` if the user has never written anything.
    async fn find(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError>;

    /// Point the profile at a new avatar. The profile must already exist.
    async fn set_picture_url(&self, user_id: &UserId, url: &str) -> Result<(), DomainError>;

    /// Number of registered profiles.
    async fn count(&self) -> Result<u64, DomainError>;
}
