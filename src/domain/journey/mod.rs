//! Journey - per-user aggregation of the coffee journal.
//!
//! Everything here is pure and synchronous: callers load a snapshot of
//! entries and these functions derive the grouped, progress, map, calendar
//! and passport views from it. Entries with origins missing from the catalog
//! never appear in grouped output.

mod aggregator;
mod calendar;
mod map;
mod milestones;
mod passport;

pub use aggregator::{
    group_by_country, group_by_country_with_report, CountryAggregate, CountryGrouping,
};
pub use calendar::{calendar_month, entries_by_day, CalendarDay, CalendarMonth, MAX_DAY_ICONS};
pub use map::{map_markers, MapMarker};
pub use milestones::{
    evaluate, JourneyProgress, Milestone, MilestoneId, MilestoneMetric, MilestoneStatus,
    MILESTONES,
};
pub use passport::{passport, Passport, PassportStamp, RarityTally};
