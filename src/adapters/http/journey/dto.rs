//! Query-string DTOs for journey endpoints.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::domain::catalog::Rarity;
use crate::domain::foundation::ValidationError;

/// `?year=&month=`; either may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl CalendarParams {
    /// Fills missing parts from `today`.
    pub fn resolve(&self, today: NaiveDate) -> (i32, u32) {
        (
            self.year.unwrap_or_else(|| today.year()),
            self.month.unwrap_or_else(|| today.month()),
        )
    }
}

/// `?rarity=common|rare|legendary`; blank or absent means all tiers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PassportParams {
    pub rarity: Option<String>,
}

impl PassportParams {
    pub fn rarity(&self) -> Result<Option<Rarity>, ValidationError> {
        match self.rarity.as_deref().map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}
