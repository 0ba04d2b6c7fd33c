//! World map markers: one pin per catalog origin.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::catalog::{Coordinates, Rarity, Region, COUNTRIES};
use crate::domain::foundation::Timestamp;
use crate::domain::journal::CoffeeEntry;

use super::aggregator::{group_by_country, CountryAggregate};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub code: &'static str,
    pub name: &'static str,
    pub region: Region,
    pub rarity: Rarity,
    pub flavor_profile: &'static str,
    pub coordinates: Coordinates,
    pub locked: bool,
    pub entry_count: usize,
    pub first_collected_at: Option<Timestamp>,
}

/// Builds markers for every catalog origin, locked where the user has no entry.
pub fn map_markers(entries: &[CoffeeEntry]) -> Vec<MapMarker> {
    markers_from_groups(&group_by_country(entries))
}

fn markers_from_groups(groups: &[CountryAggregate]) -> Vec<MapMarker> {
    let by_code: HashMap<&str, &CountryAggregate> =
        groups.iter().map(|g| (g.code.as_str(), g)).collect();

    COUNTRIES
        .iter()
        .map(|country| {
            let group = by_code.get(country.code);
            MapMarker {
                code: country.code,
                name: country.name,
                region: country.region,
                rarity: country.rarity,
                flavor_profile: country.flavor_profile,
                coordinates: country.coordinates,
                locked: group.is_none(),
                entry_count: group.map_or(0, |g| g.entry_count()),
                first_collected_at: group.map(|g| g.first_collected_at),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CountryCode, TOTAL_COUNTRIES};
    use crate::domain::foundation::{EntryId, UserId};

    fn entry(code: &str) -> CoffeeEntry {
        CoffeeEntry::reconstitute(
            EntryId::new(),
            UserId::new("user-1").unwrap(),
            CountryCode::new(code).unwrap(),
            None,
            None,
            None,
            None,
            Timestamp::now(),
        )
    }

    #[test]
    fn every_catalog_origin_gets_a_marker() {
        let markers = map_markers(&[]);
        assert_eq!(markers.len(), TOTAL_COUNTRIES);
        assert!(markers.iter().all(|m| m.locked && m.entry_count == 0));
    }

    #[test]
    fn logged_origins_are_unlocked_with_counts() {
        let markers = map_markers(&[entry("ET"), entry("ET"), entry("KE")]);

        let et = markers.iter().find(|m| m.code == "ET").unwrap();
        assert!(!et.locked);
        assert_eq!(et.entry_count, 2);
        assert!(et.first_collected_at.is_some());
        assert_eq!(markers.iter().filter(|m| !m.locked).count(), 2);
    }

    #[test]
    fn unknown_origins_add_no_marker() {
        let markers = map_markers(&[entry("XX")]);
        assert_eq!(markers.len(), TOTAL_COUNTRIES);
        assert!(markers.iter().all(|m| m.code != "XX" && m.locked));
    }
}
