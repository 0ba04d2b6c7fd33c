//! Bean Passport - coffee origin journal backend
//!
//! Users log the coffees they drink; this crate derives the journey views
//! (world map, calendar, passport stamps, milestones) and community
//! statistics from those entries and serves them over HTTP.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
