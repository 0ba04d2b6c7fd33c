//! CoffeeEntry - one logged cup tied to an origin country.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{self, BrewMethod, CountryCode, RoastLevel};
use crate::domain::foundation::{EntryId, Timestamp, UserId, ValidationError};

/// Maximum length of the free-text tasting note, in characters.
pub const MAX_NOTE_CHARS: usize = 280;

/// A single coffee-drinking event.
///
/// Entries are immutable once recorded. `origin_country` is checked against
/// the catalog at record time, but rows loaded from storage are taken as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeEntry {
    pub id: EntryId,
    pub user_id: UserId,
    pub origin_country: CountryCode,
    pub roast_level: Option<RoastLevel>,
    pub brew_method: Option<BrewMethod>,
    pub note: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: Timestamp,
}

/// User-supplied fields for a new entry, before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewCoffeeEntry {
    pub origin_country: String,
    #[serde(default)]
    pub roast_level: Option<RoastLevel>,
    #[serde(default)]
    pub brew_method: Option<BrewMethod>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl CoffeeEntry {
    /// Validates user input and builds a new entry stamped at `now`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if no origin was given
    /// - `UnknownCountry` if the origin is not in the catalog
    /// - `TooLong` if the note exceeds [`MAX_NOTE_CHARS`]
    pub fn record(
        user_id: UserId,
        input: NewCoffeeEntry,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let origin_country = CountryCode::new(&input.origin_country)?;
        if !catalog::is_known(origin_country.as_str()) {
            return Err(ValidationError::unknown_country(origin_country.as_str()));
        }

        let note = non_blank(input.note);
        if let Some(note) = &note {
            let chars = note.chars().count();
            if chars > MAX_NOTE_CHARS {
                return Err(ValidationError::too_long("note", MAX_NOTE_CHARS, chars));
            }
        }

        Ok(Self {
            id: EntryId::new(),
            user_id,
            origin_country,
            roast_level: input.roast_level,
            brew_method: input.brew_method,
            note,
            photo_url: non_blank(input.photo_url),
            created_at: now,
        })
    }

    /// Rebuilds an entry from persisted fields without validation.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: EntryId,
        user_id: UserId,
        origin_country: CountryCode,
        roast_level: Option<RoastLevel>,
        brew_method: Option<BrewMethod>,
        note: Option<String>,
        photo_url: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            origin_country,
            roast_level,
            brew_method,
            note,
            photo_url,
            created_at,
        }
    }

    /// Returns true if this entry's origin resolves in the catalog.
    pub fn has_known_origin(&self) -> bool {
        catalog::is_known(self.origin_country.as_str())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
