//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresCoffeeEntryRepository` - Append-only journal storage
//! - `PostgresProfileRepository` - Profile rows and the community user count
//!
//! User ids come from the auth service and are stored as UUIDs.

mod coffee_entry_repository;
mod profile_repository;

pub use coffee_entry_repository::PostgresCoffeeEntryRepository;
pub use profile_repository::PostgresProfileRepository;

use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

fn parse_user_id_as_uuid(user_id: &UserId) -> Result<Uuid, DomainError> {
    Uuid::parse_str(user_id.as_str()).map_err(|e| {
        DomainError::new(
            ErrorCode::ValidationFailed,
            format!("User ID must be a valid UUID: {}", e),
        )
    })
}
