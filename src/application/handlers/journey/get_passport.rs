//! GetPassportHandler - Query handler for the collection grid.

use std::sync::Arc;

use super::load_journal;
use crate::domain::catalog::Rarity;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::journey::{passport, Passport};
use crate::ports::CoffeeEntryRepository;

#[derive(Debug, Clone)]
pub struct GetPassportQuery {
    pub user_id: UserId,
    pub rarity: Option<Rarity>,
}

pub struct GetPassportHandler {
    entries: Arc<dyn CoffeeEntryRepository>,
}

impl GetPassportHandler {
    pub fn new(entries: Arc<dyn CoffeeEntryRepository>) -> Self {
        Self { entries }
    }

    pub async fn handle(&self, query: GetPassportQuery) -> Result<Passport, DomainError> {
        let journal = load_journal(self.entries.as_ref(), &query.user_id).await?;
        Ok(passport(&journal, query.rarity))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{alice, example_repo};
    use super::*;

    #[tokio::test]
    async fn filters_by_rarity() {
        let handler = GetPassportHandler::new(Arc::new(example_repo()));

        let rare = handler
            .handle(GetPassportQuery { user_id: alice(), rarity: Some(Rarity::Rare) })
            .await
            .unwrap();

        assert_eq!(rare.stamps.len(), 12);
        assert_eq!(rare.stamps.iter().filter(|s| s.unlocked).count(), 2);
        assert_eq!(rare.unlocked_count, 2);
    }
}
