//! Calendar view: entries bucketed by local calendar day.

use chrono::{Datelike, NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::catalog::CountryCode;
use crate::domain::foundation::ValidationError;
use crate::domain::journal::CoffeeEntry;

/// Maximum origin icons drawn in one day cell; the rest become an overflow count.
pub const MAX_DAY_ICONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    pub entry_count: usize,
    pub icons: Vec<CountryCode>,
    pub overflow: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st in a Sunday-first week grid.
    pub leading_blank_days: u32,
    pub total_entries: usize,
    pub days: Vec<CalendarDay>,
}

/// Buckets entries by the calendar day they fall on in `tz`.
///
/// Within a day, entries keep their input order. Entries with an origin
/// outside the catalog are skipped.
pub fn entries_by_day<'a, Tz: TimeZone>(
    entries: &'a [CoffeeEntry],
    tz: &Tz,
) -> BTreeMap<NaiveDate, Vec<&'a CoffeeEntry>> {
    let mut days: BTreeMap<NaiveDate, Vec<&CoffeeEntry>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.has_known_origin()) {
        days.entry(entry.created_at.calendar_day_in(tz))
            .or_default()
            .push(entry);
    }
    days
}

/// Builds one month of the calendar grid.
///
/// # Errors
///
/// `OutOfRange` for a month outside 1..=12, `InvalidFormat` for a year chrono
/// cannot represent.
pub fn calendar_month<Tz: TimeZone>(
    entries: &[CoffeeEntry],
    year: i32,
    month: u32,
    tz: &Tz,
) -> Result<CalendarMonth, ValidationError> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::out_of_range("month", 1, 12, month as i32));
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ValidationError::invalid_format("year", format!("{} is out of range", year)))?;
    let days_in_month = days_in_month(first);

    let buckets = entries_by_day(entries, tz);

    let days: Vec<CalendarDay> = (1..=days_in_month)
        .filter_map(|d| first.with_day(d))
        .map(|date| {
            let day_entries = buckets.get(&date).map(Vec::as_slice).unwrap_or(&[]);
            CalendarDay {
                date,
                day: date.day(),
                entry_count: day_entries.len(),
                icons: day_entries
                    .iter()
                    .take(MAX_DAY_ICONS)
                    .map(|e| e.origin_country.clone())
                    .collect(),
                overflow: day_entries.len().saturating_sub(MAX_DAY_ICONS),
            }
        })
        .collect();

    Ok(CalendarMonth {
        year,
        month,
        leading_blank_days: first.weekday().num_days_from_sunday(),
        total_entries: days.iter().map(|d| d.entry_count).sum(),
        days,
    })
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}
