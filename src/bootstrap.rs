//! Wiring: turns configuration into port implementations.
//!
//! One connection pool is built per process and shared by the repositories
//! through `Arc<dyn Port>`. Missing sections select the offline adapters.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::adapters::auth::{OfflineSessionValidator, SupabaseAuthConfig, SupabaseJwtValidator};
use crate::adapters::http::{ApiServices, RouterOptions};
use crate::adapters::offline::OfflineBackend;
use crate::adapters::postgres::{PostgresCoffeeEntryRepository, PostgresProfileRepository};
use crate::adapters::storage::{SupabasePhotoStorage, SupabaseStorageConfig};
use crate::config::{AppConfig, AuthConfig, BackendMode, DatabaseConfig, StorageConfig};
use crate::ports::{
    CoffeeEntryRepository, PhotoStorage, ProfileRepository, SessionValidator, StorageError,
};

/// Errors raised while building the backend at startup.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Photo storage setup failed: {0}")]
    Storage(#[from] StorageError),
}

/// Data ports for the selected backend.
#[derive(Clone)]
pub struct Backend {
    pub mode: BackendMode,
    pub entries: Arc<dyn CoffeeEntryRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
}

impl Backend {
    /// Connects to Postgres when configured, otherwise returns the offline backend.
    pub async fn connect(database: Option<&DatabaseConfig>) -> Result<Self, BootstrapError> {
        let Some(database) = database else {
            tracing::warn!("No database configured; running in offline mode");
            return Ok(Self::offline());
        };

        tracing::info!(url = %database.redacted_url(), "Connecting to database");
        let pool = PgPoolOptions::new()
            .min_connections(database.min_connections)
            .max_connections(database.max_connections)
            .acquire_timeout(database.acquire_timeout())
            .idle_timeout(database.idle_timeout())
            .connect(&database.url)
            .await?;

        if database.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self {
            mode: BackendMode::Postgres,
            entries: Arc::new(PostgresCoffeeEntryRepository::new(pool.clone())),
            profiles: Arc::new(PostgresProfileRepository::new(pool)),
        })
    }

    /// Reads return nothing; writes fail with `BACKEND_UNAVAILABLE`.
    pub fn offline() -> Self {
        let backend = Arc::new(OfflineBackend);
        Self {
            mode: BackendMode::Offline,
            entries: backend.clone(),
            profiles: backend,
        }
    }
}

/// Hosted-auth validator, or one that rejects every token.
pub fn session_validator(auth: Option<&AuthConfig>) -> Arc<dyn SessionValidator> {
    match auth {
        Some(auth) => {
            let mut config = SupabaseAuthConfig::new(auth.jwt_secret.clone(), auth.audience.clone());
            if let Some(issuer) = &auth.issuer {
                config = config.with_issuer(issuer.clone());
            }
            Arc::new(SupabaseJwtValidator::new(config))
        }
        None => {
            tracing::warn!("No auth configured; all bearer tokens will be rejected");
            Arc::new(OfflineSessionValidator)
        }
    }
}

/// Hosted object storage for `bucket`, or the offline backend that refuses
/// uploads.
pub fn photo_storage(
    storage: &StorageConfig,
    bucket: &str,
) -> Result<Arc<dyn PhotoStorage>, BootstrapError> {
    match (&storage.url, &storage.service_key) {
        (Some(url), Some(key)) => {
            let config = SupabaseStorageConfig::new(url.clone(), key.clone())
                .with_bucket(bucket.to_string())
                .with_timeout(storage.timeout());
            Ok(Arc::new(SupabasePhotoStorage::new(config)?))
        }
        _ => {
            tracing::warn!(bucket, "No photo storage configured; uploads are disabled");
            Ok(Arc::new(OfflineBackend))
        }
    }
}

/// Builds every port the HTTP layer needs.
pub async fn build_services(config: &AppConfig) -> Result<ApiServices, BootstrapError> {
    let backend = Backend::connect(config.database.as_ref()).await?;

    Ok(ApiServices {
        entries: backend.entries,
        profiles: backend.profiles,
        photos: photo_storage(&config.storage, &config.storage.bucket)?,
        avatars: photo_storage(&config.storage, &config.storage.avatar_bucket)?,
        sessions: session_validator(config.auth.as_ref()),
        backend: backend.mode,
    })
}

pub fn router_options(config: &AppConfig) -> RouterOptions {
    RouterOptions {
        cors_origins: config.server.cors_origins_list(),
        request_timeout: config.server.request_timeout(),
        max_upload_bytes: config.storage.max_upload_bytes,
    }
}
