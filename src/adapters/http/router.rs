//! Assembles the full HTTP application.
//!
//! ```text
//! /health                 public
//! /api/catalog            public
//! /api/coffee             auth
//! /api/journey/*          auth
//! /api/community          auth
//! /api/upload             auth
//! /api/profile            auth
//! /api/profile/picture    auth
//! ```
//!
//! The auth middleware wraps all of `/api`; public routes simply never ask
//! for `RequireAuth`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::{
    GetCalendarHandler, GetCommunityHandler, GetJourneyMapHandler, GetPassportHandler,
    GetProfileHandler, GetProgressHandler, ListEntriesHandler, RecordEntryHandler,
    UploadPhotoHandler, UploadProfilePictureHandler,
};
use crate::config::BackendMode;
use crate::ports::{CoffeeEntryRepository, PhotoStorage, ProfileRepository, SessionValidator};

use super::catalog::catalog_routes;
use super::community::{community_routes, CommunityHandlers};
use super::health::health_check;
use super::journal::{journal_routes, JournalHandlers};
use super::journey::{journey_routes, JourneyHandlers};
use super::middleware::auth_middleware;
use super::photos::{photo_routes, PhotoHandlers};
use super::profile::{profile_routes, ProfileHandlers};

/// Port implementations the application runs on.
#[derive(Clone)]
pub struct ApiServices {
    pub entries: Arc<dyn CoffeeEntryRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub photos: Arc<dyn PhotoStorage>,
    pub avatars: Arc<dyn PhotoStorage>,
    pub sessions: Arc<dyn SessionValidator>,
    pub backend: BackendMode,
}

/// Transport settings for the router.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Empty allows any origin.
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
    pub max_upload_bytes: u64,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
            max_upload_bytes: crate::ports::DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Builds the application router with all layers applied.
pub fn build_router(services: ApiServices, options: &RouterOptions) -> Router {
    let journal = JournalHandlers::new(
        Arc::new(RecordEntryHandler::new(
            services.entries.clone(),
            services.profiles.clone(),
        )),
        Arc::new(ListEntriesHandler::new(services.entries.clone())),
    );
    let journey = JourneyHandlers::new(
        Arc::new(GetJourneyMapHandler::new(services.entries.clone())),
        Arc::new(GetCalendarHandler::new(services.entries.clone())),
        Arc::new(GetPassportHandler::new(services.entries.clone())),
        Arc::new(GetProgressHandler::new(services.entries.clone())),
    );
    let community = CommunityHandlers::new(Arc::new(GetCommunityHandler::new(
        services.entries.clone(),
        services.profiles.clone(),
    )));
    let photos = PhotoHandlers::new(Arc::new(UploadPhotoHandler::new(
        services.photos.clone(),
        options.max_upload_bytes,
    )));
    let profile = ProfileHandlers::new(
        Arc::new(GetProfileHandler::new(
            services.entries.clone(),
            services.profiles.clone(),
        )),
        Arc::new(UploadProfilePictureHandler::new(
            services.avatars.clone(),
            services.profiles.clone(),
            options.max_upload_bytes,
        )),
    );
    let body_limit = usize::try_from(options.max_upload_bytes).unwrap_or(usize::MAX);

    let api = Router::new()
        .nest("/catalog", catalog_routes())
        .nest("/coffee", journal_routes(journal))
        .nest("/journey", journey_routes(journey))
        .nest("/community", community_routes(community))
        .nest("/upload", photo_routes(photos, body_limit))
        .nest("/profile", profile_routes(profile, body_limit))
        .layer(middleware::from_fn_with_state(
            services.sessions.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .with_state(services.backend)
        .nest("/api", api)
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(cors_layer(&options.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
