//! Passport view: the collection grid of origin stamps.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::catalog::{Rarity, Region, COUNTRIES, TOTAL_COUNTRIES};
use crate::domain::foundation::Timestamp;
use crate::domain::journal::CoffeeEntry;

use super::aggregator::{group_by_country, CountryAggregate};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassportStamp {
    pub code: &'static str,
    pub name: &'static str,
    pub region: Region,
    pub rarity: Rarity,
    pub flavor_profile: &'static str,
    pub unlocked: bool,
    pub entry_count: usize,
    pub first_collected_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RarityTally {
    pub rarity: Rarity,
    pub unlocked: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Passport {
    /// Catalog order, narrowed by the rarity filter if one was given.
    pub stamps: Vec<PassportStamp>,
    /// Unlocked origins across the whole catalog, regardless of filter.
    pub unlocked_count: usize,
    pub total_count: usize,
    pub by_rarity: Vec<RarityTally>,
}

pub fn passport(entries: &[CoffeeEntry], filter: Option<Rarity>) -> Passport {
    let groups = group_by_country(entries);
    let by_code: HashMap<&str, &CountryAggregate> =
        groups.iter().map(|g| (g.code.as_str(), g)).collect();

    let by_rarity = Rarity::ALL
        .iter()
        .map(|&rarity| {
            let tier = COUNTRIES.iter().filter(|c| c.rarity == rarity);
            RarityTally {
                rarity,
                unlocked: tier.clone().filter(|c| by_code.contains_key(c.code)).count(),
                total: tier.count(),
            }
        })
        .collect();

    let stamps = COUNTRIES
        .iter()
        .filter(|c| filter.map_or(true, |r| c.rarity == r))
        .map(|country| {
            let group = by_code.get(country.code);
            PassportStamp {
                code: country.code,
                name: country.name,
                region: country.region,
                rarity: country.rarity,
                flavor_profile: country.flavor_profile,
                unlocked: group.is_some(),
                entry_count: group.map_or(0, |g| g.entry_count()),
                first_collected_at: group.map(|g| g.first_collected_at),
            }
        })
        .collect();

    Passport {
        stamps,
        unlocked_count: groups.len(),
        total_count: TOTAL_COUNTRIES,
        by_rarity,
    }
}
