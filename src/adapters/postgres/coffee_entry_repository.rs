//! PostgreSQL implementation of CoffeeEntryRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::parse_user_id_as_uuid;
use crate::domain::catalog::{BrewMethod, CountryCode, RoastLevel};
use crate::domain::foundation::{DomainError, EntryId, ErrorCode, Timestamp, UserId};
use crate::domain::journal::CoffeeEntry;
use crate::ports::CoffeeEntryRepository;

/// PostgreSQL implementation of the CoffeeEntryRepository port.
pub struct PostgresCoffeeEntryRepository {
    pool: PgPool,
}

impl PostgresCoffeeEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a coffee entry.
#[derive(Debug, sqlx::FromRow)]
struct CoffeeEntryRow {
    id: Uuid,
    user_id: Uuid,
    origin_country: String,
    roast_level: Option<String>,
    brew_method: Option<String>,
    note: Option<String>,
    photo_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CoffeeEntryRow> for CoffeeEntry {
    type Error = DomainError;

    fn try_from(row: CoffeeEntryRow) -> Result<Self, Self::Error> {
        let origin_country = CountryCode::new(&row.origin_country).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid origin_country: {}", e))
        })?;
        let user_id = UserId::new(row.user_id.to_string()).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
        })?;

        Ok(CoffeeEntry::reconstitute(
            EntryId::from_uuid(row.id),
            user_id,
            origin_country,
            row.roast_level.as_deref().and_then(|v| parse_or_warn(v, RoastLevel::parse)),
            row.brew_method.as_deref().and_then(|v| parse_or_warn(v, BrewMethod::parse)),
            row.note,
            row.photo_url,
            Timestamp::from_datetime(row.created_at),
        ))
    }
}

/// Stored values outside the current tables are dropped rather than failing the read.
fn parse_or_warn<T>(value: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(value);
    if parsed.is_none() {
        tracing::warn!(value, "Ignoring unrecognized stored value");
    }
    parsed
}

/// Converts rows, skipping any that cannot form an entry so one bad row does
/// not hide the rest of the journal.
fn entries_from_rows(rows: Vec<CoffeeEntryRow>) -> Vec<CoffeeEntry> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            match CoffeeEntry::try_from(row) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(entry_id = %id, "Skipping unreadable coffee entry: {}", e.message);
                    None
                }
            }
        })
        .collect()
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, origin_country, roast_level, brew_method, note, photo_url, created_at
    FROM coffee_entries
"#;

#[async_trait]
impl CoffeeEntryRepository for PostgresCoffeeEntryRepository {
    async fn save(&self, entry: &CoffeeEntry) -> Result<(), DomainError> {
        let user_uuid = parse_user_id_as_uuid(&entry.user_id)?;

        sqlx::query(
            r#"
            INSERT INTO coffee_entries (
                id, user_id, origin_country, roast_level, brew_method, note, photo_url, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(user_uuid)
        .bind(entry.origin_country.as_str())
        .bind(entry.roast_level.map(|r| r.as_str()))
        .bind(entry.brew_method.map(|b| b.as_str()))
        .bind(&entry.note)
        .bind(&entry.photo_url)
        .bind(entry.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to save coffee entry: {}", e))
        })?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<CoffeeEntry>, DomainError> {
        let user_uuid = parse_user_id_as_uuid(user_id)?;

        let rows: Vec<CoffeeEntryRow> = sqlx::query_as(&format!(
            "{} WHERE user_id = $1 ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .bind(user_uuid)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch coffee entries: {}", e),
            )
        })?;

        Ok(entries_from_rows(rows))
    }

    async fn find_all(&self) -> Result<Vec<CoffeeEntry>, DomainError> {
        let rows: Vec<CoffeeEntryRow> = sqlx::query_as(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch coffee entries: {}", e),
                )
            })?;

        Ok(entries_from_rows(rows))
    }
}
