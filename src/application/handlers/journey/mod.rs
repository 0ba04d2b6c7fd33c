//! Journey handlers.
//!
//! Read-side queries that load one user's journal and derive a view from it:
//! the world map, a calendar month, the passport grid and milestone progress.

mod get_calendar;
mod get_journey_map;
mod get_passport;
mod get_progress;

pub use get_calendar::{GetCalendarHandler, GetCalendarQuery};
pub use get_journey_map::{GetJourneyMapHandler, GetJourneyMapQuery};
pub use get_passport::{GetPassportHandler, GetPassportQuery};
pub use get_progress::{GetProgressHandler, GetProgressQuery};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::journal::CoffeeEntry;
use crate::ports::CoffeeEntryRepository;

/// Loads a user's entries, logging any whose origin the catalog no longer knows.
async fn load_journal(
    entries: &dyn CoffeeEntryRepository,
    user_id: &UserId,
) -> Result<Vec<CoffeeEntry>, DomainError> {
    let journal = entries.find_by_user(user_id).await?;

    let unrecognized = journal.iter().filter(|e| !e.has_known_origin()).count();
    if unrecognized > 0 {
        tracing::warn!(
            user_id = %user_id,
            unrecognized,
            "Skipping entries with unknown origin"
        );
    }

    Ok(journal)
}
