//! Profile - the per-user row and the profile page summary.

use serde::Serialize;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::journey::JourneyProgress;

/// Stored profile row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub user_id: UserId,
    pub email: Option<String>,
    pub profile_picture_url: Option<String>,
    pub created_at: Timestamp,
}

impl Profile {
    /// A fresh profile, as created on the user's first write.
    pub fn new(user_id: UserId, email: Option<String>, created_at: Timestamp) -> Self {
        Self {
            user_id,
            email,
            profile_picture_url: None,
            created_at,
        }
    }
}

/// What the profile page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub email: Option<String>,
    /// `None` until the profile row exists.
    pub member_since: Option<Timestamp>,
    pub profile_picture_url: Option<String>,
    pub total_entries: usize,
    pub unique_countries: usize,
    pub badges_earned: usize,
    pub badges_total: usize,
}

impl ProfileSummary {
    /// Combines the stored row (if any) with journey totals.
    ///
    /// The session email wins over the stored one, which may be stale.
    pub fn build(
        session_email: Option<&str>,
        profile: Option<&Profile>,
        progress: &JourneyProgress,
    ) -> Self {
        Self {
            email: session_email
                .map(String::from)
                .or_else(|| profile.and_then(|p| p.email.clone())),
            member_since: profile.map(|p| p.created_at),
            profile_picture_url: profile.and_then(|p| p.profile_picture_url.clone()),
            total_entries: progress.total_entries,
            unique_countries: progress.unique_countries,
            badges_earned: progress.badges_earned,
            badges_total: progress.badges_total,
        }
    }
}
