//! HTTP DTOs for the catalog endpoint.

use serde::Serialize;

use crate::domain::catalog::{BrewMethod, CountryReference, Rarity, RoastLevel, COUNTRIES};
use crate::domain::journey::{Milestone, MILESTONES};

/// A selectable value with its display label.
#[derive(Debug, Clone, Serialize)]
pub struct OptionResponse {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub countries: &'static [CountryReference],
    pub rarities: Vec<OptionResponse>,
    pub roast_levels: Vec<OptionResponse>,
    pub brew_methods: Vec<OptionResponse>,
    pub milestones: &'static [Milestone],
}

impl CatalogResponse {
    pub fn build() -> Self {
        Self {
            countries: &COUNTRIES,
            rarities: Rarity::ALL
                .iter()
                .map(|r| OptionResponse {
                    value: r.as_str(),
                    label: r.display_name(),
                })
                .collect(),
            roast_levels: RoastLevel::ALL
                .iter()
                .map(|r| OptionResponse {
                    value: r.as_str(),
                    label: r.label(),
                })
                .collect(),
            brew_methods: BrewMethod::ALL
                .iter()
                .map(|b| OptionResponse {
                    value: b.as_str(),
                    label: b.label(),
                })
                .collect(),
            milestones: &MILESTONES,
        }
    }
}
