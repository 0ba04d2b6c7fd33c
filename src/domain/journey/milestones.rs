//! Progress and milestone evaluation.
//!
//! Milestones are static thresholds over two metrics: total entries logged
//! and distinct origin countries logged. Both metrics only grow as entries
//! are added, so once a milestone is achieved it stays achieved.

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::domain::catalog::TOTAL_COUNTRIES;
use crate::domain::journal::CoffeeEntry;

/// Stable identifier of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneId {
    FirstCoffee,
    #[serde(rename = "coffee_5")]
    Coffee5,
    #[serde(rename = "coffee_10")]
    Coffee10,
    #[serde(rename = "coffee_25")]
    Coffee25,
    #[serde(rename = "coffee_50")]
    Coffee50,
    #[serde(rename = "coffee_100")]
    Coffee100,
    #[serde(rename = "country_1")]
    Country1,
    #[serde(rename = "country_5")]
    Country5,
    #[serde(rename = "country_10")]
    Country10,
    #[serde(rename = "country_15")]
    Country15,
    #[serde(rename = "country_25")]
    Country25,
    #[serde(rename = "country_35")]
    Country35,
    CountryAll,
}

impl MilestoneId {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneId::FirstCoffee => "first_coffee",
            MilestoneId::Coffee5 => "coffee_5",
            MilestoneId::Coffee10 => "coffee_10",
            MilestoneId::Coffee25 => "coffee_25",
            MilestoneId::Coffee50 => "coffee_50",
            MilestoneId::Coffee100 => "coffee_100",
            MilestoneId::Country1 => "country_1",
            MilestoneId::Country5 => "country_5",
            MilestoneId::Country10 => "country_10",
            MilestoneId::Country15 => "country_15",
            MilestoneId::Country25 => "country_25",
            MilestoneId::Country35 => "country_35",
            MilestoneId::CountryAll => "country_all",
        }
    }
}

impl fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a milestone threshold is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneMetric {
    TotalEntries,
    UniqueCountries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub id: MilestoneId,
    pub label: &'static str,
    pub description: &'static str,
    pub threshold: usize,
    pub metric: MilestoneMetric,
}

const fn milestone(
    id: MilestoneId,
    label: &'static str,
    description: &'static str,
    threshold: usize,
    metric: MilestoneMetric,
) -> Milestone {
    Milestone {
        id,
        label,
        description,
        threshold,
        metric,
    }
}

use MilestoneMetric::{TotalEntries, UniqueCountries};

pub static MILESTONES: [Milestone; 13] = [
    milestone(MilestoneId::FirstCoffee, "First Sip", "Log your first coffee", 1, TotalEntries),
    milestone(MilestoneId::Coffee5, "Coffee Explorer", "Log 5 coffees", 5, TotalEntries),
    milestone(MilestoneId::Coffee10, "Coffee Enthusiast", "Log 10 coffees", 10, TotalEntries),
    milestone(MilestoneId::Coffee25, "Coffee Connoisseur", "Log 25 coffees", 25, TotalEntries),
    milestone(MilestoneId::Coffee50, "Coffee Aficionado", "Log 50 coffees", 50, TotalEntries),
    milestone(MilestoneId::Coffee100, "Coffee Master", "Log 100 coffees", 100, TotalEntries),
    milestone(MilestoneId::Country1, "First Stamp", "Collect your first country", 1, UniqueCountries),
    milestone(MilestoneId::Country5, "Globe Trotter", "Collect 5 countries", 5, UniqueCountries),
    milestone(MilestoneId::Country10, "Continental", "Collect 10 countries", 10, UniqueCountries),
    milestone(MilestoneId::Country15, "World Explorer", "Collect 15 countries", 15, UniqueCountries),
    milestone(MilestoneId::Country25, "World Traveler", "Collect 25 countries", 25, UniqueCountries),
    milestone(MilestoneId::Country35, "Coffee Diplomat", "Collect 35 countries", 35, UniqueCountries),
    milestone(
        MilestoneId::CountryAll,
        "Coffee Ambassador",
        "Collect every coffee origin",
        TOTAL_COUNTRIES,
        UniqueCountries,
    ),
];

impl Milestone {
    pub fn is_met(&self, total_entries: usize, unique_countries: usize) -> bool {
        self.current(total_entries, unique_countries) >= self.threshold
    }

    fn current(&self, total_entries: usize, unique_countries: usize) -> usize {
        match self.metric {
            MilestoneMetric::TotalEntries => total_entries,
            MilestoneMetric::UniqueCountries => unique_countries,
        }
    }
}

/// One milestone with the user's standing against it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneStatus {
    pub milestone: Milestone,
    pub achieved: bool,
    /// Current value of the milestone's metric, capped at its threshold.
    pub current: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyProgress {
    pub total_entries: usize,
    pub unique_countries: usize,
    pub total_countries: usize,
    pub completion_percent: u8,
    pub achieved: BTreeSet<MilestoneId>,
    pub milestones: Vec<MilestoneStatus>,
    pub badges_earned: usize,
    pub badges_total: usize,
}

/// Evaluates progress over a user's full entry set.
///
/// `unique_countries` counts distinct origin codes as stored, including any
/// that no longer resolve in the catalog.
pub fn evaluate(entries: &[CoffeeEntry]) -> JourneyProgress {
    let total_entries = entries.len();
    let unique_countries = entries
        .iter()
        .map(|e| e.origin_country.as_str())
        .collect::<HashSet<_>>()
        .len();

    let milestones: Vec<MilestoneStatus> = MILESTONES
        .iter()
        .map(|m| MilestoneStatus {
            milestone: *m,
            achieved: m.is_met(total_entries, unique_countries),
            current: m.current(total_entries, unique_countries).min(m.threshold),
        })
        .collect();

    let achieved: BTreeSet<MilestoneId> = milestones
        .iter()
        .filter(|s| s.achieved)
        .map(|s| s.milestone.id)
        .collect();

    JourneyProgress {
        total_entries,
        unique_countries,
        total_countries: TOTAL_COUNTRIES,
        completion_percent: completion_percent(unique_countries),
        badges_earned: achieved.len(),
        badges_total: MILESTONES.len(),
        achieved,
        milestones,
    }
}

fn completion_percent(unique_countries: usize) -> u8 {
    let percent = (unique_countries as f64 / TOTAL_COUNTRIES as f64 * 100.0).round();
    percent.min(100.0) as u8
}
