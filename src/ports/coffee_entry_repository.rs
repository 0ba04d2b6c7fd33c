//! CoffeeEntryRepository port for journal persistence.
//!
//! Entries are append-only: there is no update or delete. Reads return
//! snapshots that the journey and community aggregations run over.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::journal::CoffeeEntry;

/// Repository for recorded coffee entries.
#[async_trait]
pub trait CoffeeEntryRepository: Send + Sync {
    /// Persist a newly recorded entry.
    ///
    /// # Errors
    ///
    /// - `BackendUnavailable` when no backend is configured
    /// - `DatabaseError` on persistence failure
    async fn save(&self, entry: &CoffeeEntry) -> Result<(), DomainError>;

    /// All entries for one user, newest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<CoffeeEntry>, DomainError>;

    /// Every user's entries, in no particular order.
    async fn find_all(&self) -> Result<Vec<CoffeeEntry>, DomainError>;
}
