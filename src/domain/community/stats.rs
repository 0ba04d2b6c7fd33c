//! Cross-user statistics: origin popularity and same-day "coffee twins".

use chrono::{NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::domain::catalog::{self, CountryCode};
use crate::domain::foundation::UserId;
use crate::domain::journal::CoffeeEntry;

/// Length of the list returned by the popularity ranking.
pub const TOP_COUNTRIES: usize = 5;

/// Characters of the user id shown as a share code.
const FRIEND_CODE_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunityStat {
    pub country: CountryCode,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunityStats {
    pub popularity_ranking: Vec<CommunityStat>,
    pub twins: Vec<CommunityStat>,
}

/// Everything the community page shows for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunitySnapshot {
    pub twins: Vec<CommunityStat>,
    /// Catalog origins the user has ever logged, in first-logged order.
    pub user_countries: Vec<CountryCode>,
    pub total_users: u64,
    pub total_coffees: usize,
    pub coffees_today: usize,
    pub top_countries: Vec<CommunityStat>,
    pub friend_code: String,
}

/// Computes popularity and twins over every user's entries.
///
/// `as_of` is the local day used for twins, in the zone `tz`.
pub fn community_stats<Tz: TimeZone>(
    all_entries: &[CoffeeEntry],
    current_user: &UserId,
    as_of: NaiveDate,
    tz: &Tz,
) -> CommunityStats {
    CommunityStats {
        popularity_ranking: popularity_ranking(all_entries),
        twins: twins(all_entries, current_user, as_of, tz),
    }
}

/// Builds the full community page for `current_user`.
pub fn community_snapshot<Tz: TimeZone>(
    all_entries: &[CoffeeEntry],
    current_user: &UserId,
    total_users: u64,
    as_of: NaiveDate,
    tz: &Tz,
) -> CommunitySnapshot {
    let stats = community_stats(all_entries, current_user, as_of, tz);

    let mut seen = HashSet::new();
    let user_countries = all_entries
        .iter()
        .filter(|e| &e.user_id == current_user && e.has_known_origin())
        .filter(|e| seen.insert(e.origin_country.as_str()))
        .map(|e| e.origin_country.clone())
        .collect();

    CommunitySnapshot {
        twins: stats.twins,
        user_countries,
        total_users,
        total_coffees: all_entries.len(),
        coffees_today: all_entries
            .iter()
            .filter(|e| e.created_at.calendar_day_in(tz) == as_of)
            .count(),
        top_countries: stats.popularity_ranking,
        friend_code: friend_code(current_user),
    }
}

/// Short share code derived from the user id.
pub fn friend_code(user_id: &UserId) -> String {
    user_id
        .as_str()
        .chars()
        .take(FRIEND_CODE_LEN)
        .collect::<String>()
        .to_uppercase()
}

fn popularity_ranking(entries: &[CoffeeEntry]) -> Vec<CommunityStat> {
    let mut ranking = count_known(entries.iter());
    ranking.truncate(TOP_COUNTRIES);
    ranking
}

fn twins<Tz: TimeZone>(
    entries: &[CoffeeEntry],
    current_user: &UserId,
    as_of: NaiveDate,
    tz: &Tz,
) -> Vec<CommunityStat> {
    let on_day = |e: &&CoffeeEntry| e.created_at.calendar_day_in(tz) == as_of;

    let mine_today: HashSet<&str> = entries
        .iter()
        .filter(on_day)
        .filter(|e| &e.user_id == current_user)
        .map(|e| e.origin_country.as_str())
        .collect();
    if mine_today.is_empty() {
        return Vec::new();
    }

    count_known(
        entries
            .iter()
            .filter(on_day)
            .filter(|e| &e.user_id != current_user)
            .filter(|e| mine_today.contains(e.origin_country.as_str())),
    )
}

/// Counts entries per catalog origin, highest first, ties by code.
fn count_known<'a>(entries: impl Iterator<Item = &'a CoffeeEntry>) -> Vec<CommunityStat> {
    let mut counts: HashMap<&CountryCode, usize> = HashMap::new();
    for entry in entries.filter(|e| catalog::is_known(e.origin_country.as_str())) {
        *counts.entry(&entry.origin_country).or_insert(0) += 1;
    }

    let mut stats: Vec<CommunityStat> = counts
        .into_iter()
        .map(|(country, count)| CommunityStat {
            country: country.clone(),
            count,
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EntryId, Timestamp};
    use chrono::Utc;

    fn entry(user: &str, code: &str, day: u32) -> CoffeeEntry {
        CoffeeEntry::reconstitute(
            EntryId::new(),
            UserId::new(user).unwrap(),
            CountryCode::new(code).unwrap(),
            None,
            None,
            None,
            None,
            Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap()),
        )
    }

    fn may(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    fn stat(code: &str, count: usize) -> CommunityStat {
        CommunityStat {
            country: CountryCode::new(code).unwrap(),
            count,
        }
    }

    fn me() -> UserId {
        UserId::new("alice").unwrap()
    }

    #[test]
    fn popularity_orders_by_count_descending() {
        let mut entries = Vec::new();
        entries.extend((0..3).map(|_| entry("a", "ET", 1)));
        entries.extend((0..5).map(|_| entry("b", "KE", 1)));
        entries.push(entry("c", "BR", 1));

        let stats = community_stats(&entries, &me(), may(1), &Utc);

        assert_eq!(
            stats.popularity_ranking,
            vec![stat("KE", 5), stat("ET", 3), stat("BR", 1)]
        );
    }

    #[test]
    fn popularity_ties_break_alphabetically_and_truncate() {
        let entries: Vec<_> = ["YE", "CO", "BR", "KE", "ET", "AO"]
            .iter()
            .map(|c| entry("a", c, 1))
            .collect();

        let stats = community_stats(&entries, &me(), may(1), &Utc);

        let codes: Vec<_> = stats
            .popularity_ranking
            .iter()
            .map(|s| s.country.as_str())
            .collect();
        assert_eq!(codes, vec!["AO", "BR", "CO", "ET", "KE"]);
    }

    #[test]
    fn unknown_codes_never_rank() {
        let entries = vec![entry("a", "XX", 1), entry("a", "XX", 1), entry("a", "ET", 1)];

        let stats = community_stats(&entries, &me(), may(1), &Utc);

        assert_eq!(stats.popularity_ranking, vec![stat("ET", 1)]);
    }

    #[test]
    fn twins_are_other_users_same_day_same_origin() {
        let entries = vec![
            entry("alice", "ET", 2),
            entry("alice", "KE", 2),
            entry("bob", "ET", 2),
            entry("carol", "ET", 2),
            entry("carol", "KE", 2),
            entry("dave", "BR", 2),
            entry("erin", "KE", 1),
            entry("alice", "ET", 2),
        ];

        let stats = community_stats(&entries, &me(), may(2), &Utc);

        assert_eq!(stats.twins, vec![stat("ET", 2), stat("KE", 1)]);
    }

    #[test]
    fn no_twins_without_an_entry_today() {
        let entries = vec![entry("alice", "ET", 1), entry("bob", "ET", 2)];

        let stats = community_stats(&entries, &me(), may(2), &Utc);

        assert!(stats.twins.is_empty());
    }

    #[test]
    fn snapshot_fills_summary_fields() {
        let entries = vec![
            entry("alice", "KE", 1),
            entry("alice", "ET", 2),
            entry("alice", "KE", 2),
            entry("alice", "XX", 2),
            entry("bob", "ET", 2),
        ];

        let snapshot = community_snapshot(&entries, &me(), 7, may(2), &Utc);

        let countries: Vec<_> = snapshot.user_countries.iter().map(|c| c.as_str()).collect();
        assert_eq!(countries, vec!["KE", "ET"]);
        assert_eq!(snapshot.total_users, 7);
        assert_eq!(snapshot.total_coffees, 5);
        assert_eq!(snapshot.coffees_today, 4);
        assert_eq!(snapshot.twins, vec![stat("ET", 1)]);
        assert_eq!(snapshot.friend_code, "ALICE");
    }

    #[test]
    fn friend_code_takes_first_eight_chars() {
        let id = UserId::new("3f2a9c1d-77aa-4b1e-9c3f-000000000000").unwrap();
        assert_eq!(friend_code(&id), "3F2A9C1D");
    }
}
