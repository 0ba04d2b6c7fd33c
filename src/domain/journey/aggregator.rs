//! Groups a user's entries by origin country.
//!
//! Grouping is the base for the map, the passport and the "first collected"
//! dates. Entries whose origin no longer resolves in the catalog are left out
//! of every group and only show up in the unrecognized count.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::catalog::{self, CountryCode, CountryReference};
use crate::domain::foundation::Timestamp;
use crate::domain::journal::CoffeeEntry;

/// All of one user's entries for a single catalog country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryAggregate {
    pub code: CountryCode,
    #[serde(skip)]
    pub reference: &'static CountryReference,
    /// Earliest `created_at` in the group.
    pub first_collected_at: Timestamp,
    /// Newest first.
    pub entries: Vec<CoffeeEntry>,
}

impl CountryAggregate {
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Result of grouping, with the number of entries that were dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountryGrouping {
    pub countries: Vec<CountryAggregate>,
    pub unrecognized_entries: usize,
}

/// Groups entries by origin, in order of each country's first appearance.
pub fn group_by_country(entries: &[CoffeeEntry]) -> Vec<CountryAggregate> {
    group_by_country_with_report(entries).countries
}

/// Same as [`group_by_country`], also reporting how many entries were skipped
/// because their origin is not in the catalog.
pub fn group_by_country_with_report(entries: &[CoffeeEntry]) -> CountryGrouping {
    let mut countries: Vec<CountryAggregate> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut unrecognized_entries = 0;

    for entry in entries {
        let code = entry.origin_country.as_str();
        let Some(reference) = catalog::lookup(code) else {
            unrecognized_entries += 1;
            continue;
        };

        match index.get(code) {
            Some(&i) => {
                let group = &mut countries[i];
                if entry.created_at < group.first_collected_at {
                    group.first_collected_at = entry.created_at;
                }
                group.entries.push(entry.clone());
            }
            None => {
                index.insert(code, countries.len());
                countries.push(CountryAggregate {
                    code: entry.origin_country.clone(),
                    reference,
                    first_collected_at: entry.created_at,
                    entries: vec![entry.clone()],
                });
            }
        }
    }

    for group in &mut countries {
        // sort_by is stable, so equal timestamps keep input order
        group
            .entries
            .sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }

    CountryGrouping {
        countries,
        unrecognized_entries,
    }
}
