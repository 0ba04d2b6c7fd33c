//! GetCalendarHandler - Query handler for one calendar month.

use std::sync::Arc;

use chrono::TimeZone;

use super::load_journal;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::journey::{calendar_month, CalendarMonth};
use crate::ports::CoffeeEntryRepository;

#[derive(Debug, Clone)]
pub struct GetCalendarQuery {
    pub user_id: UserId,
    pub year: i32,
    pub month: u32,
}

pub struct GetCalendarHandler {
    entries: Arc<dyn CoffeeEntryRepository>,
}

impl GetCalendarHandler {
    pub fn new(entries: Arc<dyn CoffeeEntryRepository>) -> Self {
        Self { entries }
    }

    /// Builds the month with days bucketed in `tz`.
    pub async fn handle<Tz: TimeZone + Sync>(
        &self,
        query: GetCalendarQuery,
        tz: &Tz,
    ) -> Result<CalendarMonth, DomainError> {
        let journal = load_journal(self.entries.as_ref(), &query.user_id).await?;
        Ok(calendar_month(&journal, query.year, query.month, tz)?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{alice, example_repo};
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use chrono::Utc;

    fn handler() -> GetCalendarHandler {
        GetCalendarHandler::new(Arc::new(example_repo()))
    }

    #[tokio::test]
    async fn buckets_users_entries_by_day() {
        let month = handler()
            .handle(GetCalendarQuery { user_id: alice(), year: 2024, month: 1 }, &Utc)
            .await
            .unwrap();

        assert_eq!(month.total_entries, 3);
        assert_eq!(month.days[0].entry_count, 1);
        assert_eq!(month.days[4].icons[0].as_str(), "ET");
        // the XX entry on the 6th is skipped
        assert_eq!(month.days[5].entry_count, 0);
    }

    #[tokio::test]
    async fn invalid_month_is_a_validation_error() {
        let err = handler()
            .handle(GetCalendarQuery { user_id: alice(), year: 2024, month: 13 }, &Utc)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
