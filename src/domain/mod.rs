//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth)
//! - `catalog` - Static reference data: origins, roast levels, brew methods
//! - `journal` - Coffee entries and their validation
//! - `journey` - Per-user aggregation (grouping, milestones, map, calendar, passport)
//! - `community` - Cross-user statistics
//! - `profile` - Profile row and page summary

pub mod catalog;
pub mod community;
pub mod foundation;
pub mod journal;
pub mod journey;
pub mod profile;
