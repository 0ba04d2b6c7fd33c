//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session validators (hosted JWT, offline, mock)
//! - `http` - axum REST API
//! - `memory` - In-process repositories and photo storage
//! - `offline` - Port implementations used when no backend is configured
//! - `postgres` - sqlx repositories
//! - `storage` - Object storage for entry photos

pub mod auth;
pub mod http;
pub mod memory;
pub mod offline;
pub mod postgres;
pub mod storage;
