//! Community - statistics across all users' entries.

mod stats;

pub use stats::{
    community_snapshot, community_stats, friend_code, CommunitySnapshot, CommunityStat,
    CommunityStats, TOP_COUNTRIES,
};
