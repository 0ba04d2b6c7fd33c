//! GetJourneyMapHandler - Query handler for the world map.

use std::sync::Arc;

use super::load_journal;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::journey::{map_markers, MapMarker};
use crate::ports::CoffeeEntryRepository;

#[derive(Debug, Clone)]
pub struct GetJourneyMapQuery {
    pub user_id: UserId,
}

/// Returns one marker per catalog origin, unlocked where the user has logged it.
pub struct GetJourneyMapHandler {
    entries: Arc<dyn CoffeeEntryRepository>,
}

impl GetJourneyMapHandler {
    pub fn new(entries: Arc<dyn CoffeeEntryRepository>) -> Self {
        Self { entries }
    }

    pub async fn handle(&self, query: GetJourneyMapQuery) -> Result<Vec<MapMarker>, DomainError> {
        let journal = load_journal(self.entries.as_ref(), &query.user_id).await?;
        Ok(map_markers(&journal))
    }
}
