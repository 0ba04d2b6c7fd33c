//! PostgreSQL implementation of ProfileRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::parse_user_id_as_uuid;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    email: Option<String>,
    profile_picture_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let user_id = UserId::new(row.id.to_string()).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid profile id: {}", e))
        })?;

        Ok(Profile {
            user_id,
            email: row.email,
            profile_picture_url: row.profile_picture_url,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn ensure_exists(
        &self,
        user_id: &UserId,
        email: Option<&str>,
    ) -> Result<(), DomainError> {
        let user_uuid = parse_user_id_as_uuid(user_id)?;

        let result = sqlx::query(
            r#"
            INSERT INTO profiles (id, email)
            VALUES ($1, $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(user_uuid)
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to create user profile: {}", e),
            )
        })?;

        if result.rows_affected() > 0 {
            tracing::info!(user_id = %user_id, "Created profile");
        }

        Ok(())
    }

    async fn find(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        let user_uuid = parse_user_id_as_uuid(user_id)?;

        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, email, profile_picture_url, created_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(user_uuid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to fetch profile: {}", e))
        })?;

        row.map(Profile::try_from).transpose()
    }

    async fn set_picture_url(&self, user_id: &UserId, url: &str) -> Result<(), DomainError> {
        let user_uuid = parse_user_id_as_uuid(user_id)?;

        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET profile_picture_url = $2
            WHERE id = $1
            "#,
        )
        .bind(user_uuid)
        .bind(url)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update profile picture: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("No profile for {}", user_id),
            ));
        }

        tracing::info!(user_id = %user_id, "Updated profile picture");
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Failed to count profiles: {}", e))
            })?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_converts_to_profile() {
        let id = Uuid::new_v4();
        let row = ProfileRow {
            id,
            email: Some("a@b.com".to_string()),
            profile_picture_url: Some("https://cdn.test/p.png".to_string()),
            created_at: Utc::now(),
        };

        let profile = Profile::try_from(row).unwrap();

        assert_eq!(profile.user_id.as_str(), id.to_string());
        assert_eq!(profile.profile_picture_url.as_deref(), Some("https://cdn.test/p.png"));
    }
}
