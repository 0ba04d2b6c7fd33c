//! RecordEntryHandler - Command handler for logging a coffee.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, DomainError, Timestamp};
use crate::domain::journal::{CoffeeEntry, NewCoffeeEntry};
use crate::ports::{CoffeeEntryRepository, ProfileRepository};

/// Command to record a new coffee entry for the signed-in user.
#[derive(Debug, Clone)]
pub struct RecordEntryCommand {
    pub user: AuthenticatedUser,
    pub input: NewCoffeeEntry,
}

/// Handler for recording coffee entries.
///
/// Makes sure the user's profile row exists before the entry is written.
pub struct RecordEntryHandler {
    entries: Arc<dyn CoffeeEntryRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl RecordEntryHandler {
    pub fn new(
        entries: Arc<dyn CoffeeEntryRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self { entries, profiles }
    }

    pub async fn handle(&self, cmd: RecordEntryCommand) -> Result<CoffeeEntry, DomainError> {
        // 1. Validate before touching storage
        let entry = CoffeeEntry::record(cmd.user.id.clone(), cmd.input, Timestamp::now())?;

        // 2. Profile must exist for the foreign key
        self.profiles
            .ensure_exists(&cmd.user.id, cmd.user.email.as_deref())
            .await?;

        // 3. Persist
        self.entries.save(&entry).await?;

        tracing::info!(
            user_id = %entry.user_id,
            entry_id = %entry.id,
            origin = %entry.origin_country,
            "Coffee entry recorded"
        );

        Ok(entry)
    }
}
