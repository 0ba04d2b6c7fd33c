//! ListEntriesHandler - Query handler for a user's journal.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::journal::CoffeeEntry;
use crate::ports::CoffeeEntryRepository;

#[derive(Debug, Clone)]
pub struct ListEntriesQuery {
    pub user_id: UserId,
}

/// Returns the user's entries, newest first.
pub struct ListEntriesHandler {
    entries: Arc<dyn CoffeeEntryRepository>,
}

impl ListEntriesHandler {
    pub fn new(entries: Arc<dyn CoffeeEntryRepository>) -> Self {
        Self { entries }
    }

    pub async fn handle(&self, query: ListEntriesQuery) -> Result<Vec<CoffeeEntry>, DomainError> {
        self.entries.find_by_user(&query.user_id).await
    }
}
