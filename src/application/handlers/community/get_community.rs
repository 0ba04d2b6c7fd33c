//! GetCommunityHandler - Query handler for the community page.

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone};

use crate::domain::community::{community_snapshot, CommunitySnapshot};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{CoffeeEntryRepository, ProfileRepository};

#[derive(Debug, Clone)]
pub struct GetCommunityQuery {
    pub user_id: UserId,
    /// Day used for "today" counts and twins.
    pub as_of: NaiveDate,
}

/// Aggregates every user's entries into the community snapshot.
///
/// Recomputed on each request; there is no cache.
pub struct GetCommunityHandler {
    entries: Arc<dyn CoffeeEntryRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl GetCommunityHandler {
    pub fn new(
        entries: Arc<dyn CoffeeEntryRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self { entries, profiles }
    }

    pub async fn handle<Tz: TimeZone + Sync>(
        &self,
        query: GetCommunityQuery,
        tz: &Tz,
    ) -> Result<CommunitySnapshot, DomainError> {
        let all_entries = self.entries.find_all().await?;
        let total_users = self.profiles.count().await?;

        let unrecognized = all_entries.iter().filter(|e| !e.has_known_origin()).count();
        if unrecognized > 0 {
            tracing::warn!(unrecognized, "Community stats skipping entries with unknown origin");
        }

        Ok(community_snapshot(
            &all_entries,
            &query.user_id,
            total_users,
            query.as_of,
            tz,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCoffeeEntryRepository, InMemoryProfileRepository};
    use crate::adapters::offline::OfflineBackend;
    use crate::application::handlers::journey::test_support::{alice, example_repo};
    use chrono::Utc;

    #[tokio::test]
    async fn builds_snapshot_from_all_users() {
        let profiles = InMemoryProfileRepository::new();
        profiles.ensure_exists(&alice(), None).await.unwrap();
        profiles
            .ensure_exists(&UserId::new("bob").unwrap(), None)
            .await
            .unwrap();
        let handler = GetCommunityHandler::new(Arc::new(example_repo()), Arc::new(profiles));

        let snapshot = handler
            .handle(
                GetCommunityQuery {
                    user_id: alice(),
                    as_of: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                },
                &Utc,
            )
            .await
            .unwrap();

        assert_eq!(snapshot.total_users, 2);
        assert_eq!(snapshot.total_coffees, 5);
        assert_eq!(snapshot.coffees_today, 2);
        // bob logged BR, alice logged ET that day: no overlap
        assert!(snapshot.twins.is_empty());
        assert_eq!(snapshot.top_countries[0].country.as_str(), "ET");
        assert_eq!(snapshot.top_countries[0].count, 2);
    }

    #[tokio::test]
    async fn offline_backend_yields_empty_snapshot() {
        let handler = GetCommunityHandler::new(Arc::new(OfflineBackend), Arc::new(OfflineBackend));

        let snapshot = handler
            .handle(
                GetCommunityQuery {
                    user_id: alice(),
                    as_of: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                },
                &Utc,
            )
            .await
            .unwrap();

        assert_eq!(snapshot.total_users, 0);
        assert!(snapshot.top_countries.is_empty());
        assert_eq!(snapshot.friend_code, "ALICE");
    }

    #[tokio::test]
    async fn empty_repositories_are_fine() {
        let handler = GetCommunityHandler::new(
            Arc::new(InMemoryCoffeeEntryRepository::new()),
            Arc::new(InMemoryProfileRepository::new()),
        );

        let snapshot = handler
            .handle(
                GetCommunityQuery {
                    user_id: alice(),
                    as_of: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                },
                &Utc,
            )
            .await
            .unwrap();

        assert_eq!(snapshot.total_coffees, 0);
    }
}
