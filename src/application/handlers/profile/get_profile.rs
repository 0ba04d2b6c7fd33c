//! GetProfileHandler - Query handler for the profile page.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, DomainError};
use crate::domain::journey::evaluate;
use crate::domain::profile::ProfileSummary;
use crate::ports::{CoffeeEntryRepository, ProfileRepository};

#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user: AuthenticatedUser,
}

/// Reads only; a user with no profile row yet gets an empty summary.
pub struct GetProfileHandler {
    entries: Arc<dyn CoffeeEntryRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(
        entries: Arc<dyn CoffeeEntryRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self { entries, profiles }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<ProfileSummary, DomainError> {
        let profile = self.profiles.find(&query.user.id).await?;
        let journal = self.entries.find_by_user(&query.user.id).await?;

        Ok(ProfileSummary::build(
            query.user.email.as_deref(),
            profile.as_ref(),
            &evaluate(&journal),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileRepository;
    use crate::adapters::offline::OfflineBackend;
    use crate::application::handlers::journey::test_support::{alice, example_repo};

    fn query() -> GetProfileQuery {
        GetProfileQuery {
            user: AuthenticatedUser::new(alice(), Some("alice@example.com".to_string())),
        }
    }

    #[tokio::test]
    async fn summarizes_profile_and_journal() {
        let profiles = InMemoryProfileRepository::new();
        profiles.ensure_exists(&alice(), None).await.unwrap();
        profiles
            .set_picture_url(&alice(), "https://cdn.test/avatars/a.png")
            .await
            .unwrap();
        let handler = GetProfileHandler::new(Arc::new(example_repo()), Arc::new(profiles));

        let summary = handler.handle(query()).await.unwrap();

        assert_eq!(summary.email.as_deref(), Some("alice@example.com"));
        assert!(summary.member_since.is_some());
        assert_eq!(
            summary.profile_picture_url.as_deref(),
            Some("https://cdn.test/avatars/a.png")
        );
        assert_eq!(summary.total_entries, 4);
        assert_eq!(summary.unique_countries, 3);
    }

    #[tokio::test]
    async fn works_before_profile_exists() {
        let handler = GetProfileHandler::new(Arc::new(OfflineBackend), Arc::new(OfflineBackend));

        let summary = handler.handle(query()).await.unwrap();

        assert!(summary.member_since.is_none());
        assert_eq!(summary.total_entries, 0);
        assert_eq!(summary.badges_earned, 0);
    }
}
