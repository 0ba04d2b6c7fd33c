//! HTTP DTOs for journal endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{BrewMethod, RoastLevel};
use crate::domain::foundation::ValidationError;
use crate::domain::journal::{CoffeeEntry, NewCoffeeEntry};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to record a coffee.
///
/// Roast and brew arrive as their wire strings so an unknown value becomes a
/// field-level validation error instead of a body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordEntryRequest {
    #[serde(default)]
    pub origin_country: String,
    #[serde(default)]
    pub roast_level: Option<String>,
    #[serde(default)]
    pub brew_method: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl RecordEntryRequest {
    pub fn into_new_entry(self) -> Result<NewCoffeeEntry, ValidationError> {
        Ok(NewCoffeeEntry {
            origin_country: self.origin_country,
            roast_level: parse_choice(self.roast_level, "roast_level", RoastLevel::parse)?,
            brew_method: parse_choice(self.brew_method, "brew_method", BrewMethod::parse)?,
            note: self.note,
            photo_url: self.photo_url,
        })
    }
}

/// Blank means "not given"; anything else must be a known value.
fn parse_choice<T>(
    value: Option<String>,
    field: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, ValidationError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse(raw)
            .map(Some)
            .ok_or_else(|| ValidationError::invalid_format(field, format!("unknown value '{}'", raw))),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a freshly recorded entry.
#[derive(Debug, Clone, Serialize)]
pub struct RecordEntryResponse {
    pub success: bool,
    pub data: CoffeeEntry,
}
