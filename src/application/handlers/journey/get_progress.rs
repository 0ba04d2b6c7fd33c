//! GetProgressHandler - Query handler for milestones and completion.

use std::sync::Arc;

use super::load_journal;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::journey::{evaluate, JourneyProgress};
use crate::ports::CoffeeEntryRepository;

#[derive(Debug, Clone)]
pub struct GetProgressQuery {
    pub user_id: UserId,
}

pub struct GetProgressHandler {
    entries: Arc<dyn CoffeeEntryRepository>,
}

impl GetProgressHandler {
    pub fn new(entries: Arc<dyn CoffeeEntryRepository>) -> Self {
        Self { entries }
    }

    pub async fn handle(&self, query: GetProgressQuery) -> Result<JourneyProgress, DomainError> {
        let journal = load_journal(self.entries.as_ref(), &query.user_id).await?;
        Ok(evaluate(&journal))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{alice, example_repo};
    use super::*;
    use crate::domain::journey::MilestoneId;

    #[tokio::test]
    async fn evaluates_users_journal() {
        let handler = GetProgressHandler::new(Arc::new(example_repo()));

        let progress = handler
            .handle(GetProgressQuery { user_id: alice() })
            .await
            .unwrap();

        assert_eq!(progress.total_entries, 4);
        // raw distinct codes: ET, KE, XX
        assert_eq!(progress.unique_countries, 3);
        assert!(progress.achieved.contains(&MilestoneId::Country1));
        assert!(!progress.achieved.contains(&MilestoneId::Country5));
    }
}
