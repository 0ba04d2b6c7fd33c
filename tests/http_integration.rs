//! Router-level tests against in-memory adapters.
//!
//! Every request goes through the full router: auth middleware, extractors,
//! application handlers and error mapping.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use bean_passport::adapters::auth::MockSessionValidator;
use bean_passport::adapters::http::{build_router, ApiServices, RouterOptions};
use bean_passport::adapters::memory::{
    InMemoryCoffeeEntryRepository, InMemoryPhotoStorage, InMemoryProfileRepository,
};
use bean_passport::adapters::offline::OfflineBackend;
use bean_passport::config::BackendMode;
use bean_passport::domain::catalog::CountryCode;
use bean_passport::domain::foundation::{EntryId, Timestamp, UserId};
use bean_passport::domain::journal::CoffeeEntry;

const ALICE_TOKEN: &str = "alice-token";
const BOB_TOKEN: &str = "bob-token";

// ════════════════════════════════════════════════════════════════════════════
// Fixtures
// ════════════════════════════════════════════════════════════════════════════

struct TestApp {
    router: Router,
    entries: InMemoryCoffeeEntryRepository,
    profiles: InMemoryProfileRepository,
    photos: InMemoryPhotoStorage,
    avatars: InMemoryPhotoStorage,
}

fn validator() -> Arc<MockSessionValidator> {
    Arc::new(
        MockSessionValidator::new()
            .with_test_user(ALICE_TOKEN, "alice")
            .with_test_user(BOB_TOKEN, "bob"),
    )
}

fn app_with(entries: Vec<CoffeeEntry>, options: RouterOptions) -> TestApp {
    let entries = InMemoryCoffeeEntryRepository::with_entries(entries);
    let profiles = InMemoryProfileRepository::new();
    let photos = InMemoryPhotoStorage::new("https://cdn.test/photos");
    let avatars = InMemoryPhotoStorage::new("https://cdn.test/avatars");

    let services = ApiServices {
        entries: Arc::new(entries.clone()),
        profiles: Arc::new(profiles.clone()),
        photos: Arc::new(photos.clone()),
        avatars: Arc::new(avatars.clone()),
        sessions: validator(),
        backend: BackendMode::Postgres,
    };

    TestApp {
        router: build_router(services, &options),
        entries,
        profiles,
        photos,
        avatars,
    }
}

fn app(entries: Vec<CoffeeEntry>) -> TestApp {
    app_with(entries, RouterOptions::default())
}

fn offline_app() -> Router {
    let services = ApiServices {
        entries: Arc::new(OfflineBackend),
        profiles: Arc::new(OfflineBackend),
        photos: Arc::new(OfflineBackend),
        avatars: Arc::new(OfflineBackend),
        sessions: validator(),
        backend: BackendMode::Offline,
    };
    build_router(services, &RouterOptions::default())
}

/// Mid-month noon UTC stays in the same month in any local zone.
fn entry(user: &str, code: &str, day: u32) -> CoffeeEntry {
    CoffeeEntry::reconstitute(
        EntryId::new(),
        UserId::new(user).unwrap(),
        CountryCode::new(code).unwrap(),
        None,
        None,
        None,
        None,
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 10 + day, 12, 0, 0).unwrap()),
    )
}

fn alice_journal() -> Vec<CoffeeEntry> {
    vec![
        entry("alice", "ET", 1),
        entry("alice", "KE", 3),
        entry("alice", "ET", 5),
        entry("alice", "XX", 6),
        entry("bob", "BR", 5),
    ]
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn upload(token: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Request<Body> {
    multipart_to("/api/upload", token, file_name, content_type, bytes)
}

fn multipart_to(
    uri: &str,
    token: &str,
    file_name: &str,
    content_type: &str,
    bytes: &[u8],
) -> Request<Body> {
    let boundary = "bean-passport-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\nContent-Type: {c}\r\n\r\n",
            b = boundary,
            f = file_name,
            c = content_type
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

// ════════════════════════════════════════════════════════════════════════════
// Public routes
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn health_reports_backend_mode() {
    let (status, body) = send(&app(vec![]).router, get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "backend": "postgres"}));

    let (_, body) = send(&offline_app(), get("/health", None)).await;
    assert_eq!(body["backend"], "offline");
}

#[tokio::test]
async fn catalog_is_public() {
    let (status, body) = send(&app(vec![]).router, get("/api/catalog", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["countries"].as_array().unwrap().len(), 48);
    assert_eq!(body["roast_levels"].as_array().unwrap().len(), 4);
    assert_eq!(body["brew_methods"].as_array().unwrap().len(), 11);
    assert_eq!(body["milestones"].as_array().unwrap().len(), 13);
}

// ════════════════════════════════════════════════════════════════════════════
// Authentication
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn protected_routes_require_a_user() {
    let test = app(vec![]);

    for uri in [
        "/api/coffee",
        "/api/journey/map",
        "/api/journey/calendar",
        "/api/journey/passport",
        "/api/journey/progress",
        "/api/community",
    ] {
        let (status, body) = send(&test.router, get(uri, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(
            body,
            json!({"error": "Authentication required", "code": "UNAUTHENTICATED"}),
            "{}",
            uri
        );
    }
}

#[tokio::test]
async fn unknown_token_is_rejected() {
    let (status, body) = send(&app(vec![]).router, get("/api/coffee", Some("forged"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_TOKEN");
}

// ════════════════════════════════════════════════════════════════════════════
// Journal
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn record_entry_returns_created_and_ensures_profile() {
    let test = app(vec![]);

    let (status, body) = send(
        &test.router,
        post_json(
            "/api/coffee",
            ALICE_TOKEN,
            json!({
                "origin_country": "et",
                "roast_level": "light",
                "brew_method": "pour-over",
                "note": "  "
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["origin_country"], "ET");
    assert_eq!(body["data"]["roast_level"], "light");
    assert_eq!(body["data"]["brew_method"], "pour-over");
    assert_eq!(body["data"]["note"], Value::Null);
    assert_eq!(test.entries.len().await, 1);
    assert!(test.profiles.contains(&UserId::new("alice").unwrap()).await);
}

#[tokio::test]
async fn list_entries_returns_only_own_newest_first() {
    let test = app(alice_journal());

    let (status, body) = send(&test.router, get("/api/coffee", Some(ALICE_TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["origin_country"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["XX", "ET", "KE", "ET"]);
}

#[tokio::test]
async fn unknown_origin_is_rejected() {
    let test = app(vec![]);

    let (status, body) = send(
        &test.router,
        post_json("/api/coffee", ALICE_TOKEN, json!({"origin_country": "XX"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_COUNTRY");
    assert_eq!(test.entries.len().await, 0);
}

#[tokio::test]
async fn invalid_fields_are_rejected_with_field_detail() {
    let test = app(vec![]);

    let (status, body) = send(
        &test.router,
        post_json(
            "/api/coffee",
            ALICE_TOKEN,
            json!({"origin_country": "KE", "note": "x".repeat(281)}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "note");

    let (status, body) = send(
        &test.router,
        post_json(
            "/api/coffee",
            ALICE_TOKEN,
            json!({"origin_country": "KE", "roast_level": "burnt"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "roast_level");

    let (status, _) = send(
        &test.router,
        post_json("/api/coffee", ALICE_TOKEN, json!({"roast_level": "light"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn offline_backend_refuses_writes_but_serves_reads() {
    let router = offline_app();

    let (status, body) = send(
        &router,
        post_json("/api/coffee", ALICE_TOKEN, json!({"origin_country": "ET"})),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "BACKEND_UNAVAILABLE");

    let (status, body) = send(&router, get("/api/journey/progress", Some(ALICE_TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_entries"], 0);
}

// ════════════════════════════════════════════════════════════════════════════
// Journey views
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn progress_counts_entries_and_milestones() {
    let test = app(alice_journal());

    let (status, body) = send(&test.router, get("/api/journey/progress", Some(ALICE_TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["total_entries"], 4);
    // distinct stored codes, including the unrecognized one
    assert_eq!(data["unique_countries"], 3);
    assert_eq!(data["total_countries"], 48);
    let achieved: Vec<&str> = data["achieved"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(achieved.contains(&"first_coffee"));
    assert!(achieved.contains(&"country_1"));
    assert!(!achieved.contains(&"country_5"));
}

#[tokio::test]
async fn map_unlocks_logged_origins_only() {
    let test = app(alice_journal());

    let (status, body) = send(&test.router, get("/api/journey/map", Some(ALICE_TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    let markers = body["data"].as_array().unwrap();
    assert_eq!(markers.len(), 48);
    let unlocked: Vec<&str> = markers
        .iter()
        .filter(|m| m["locked"] == false)
        .map(|m| m["code"].as_str().unwrap())
        .collect();
    assert_eq!(unlocked.len(), 2);
    assert!(unlocked.contains(&"ET") && unlocked.contains(&"KE"));
    let et = markers.iter().find(|m| m["code"] == "ET").unwrap();
    assert_eq!(et["entry_count"], 2);
}

#[tokio::test]
async fn calendar_returns_requested_month() {
    let test = app(alice_journal());

    let (status, body) = send(
        &test.router,
        get("/api/journey/calendar?year=2024&month=1", Some(ALICE_TOKEN)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["year"], 2024);
    assert_eq!(data["month"], 1);
    assert_eq!(data["days"].as_array().unwrap().len(), 31);
    // the XX entry is not drawn
    assert_eq!(data["total_entries"], 3);
}

#[tokio::test]
async fn calendar_rejects_invalid_month() {
    let test = app(vec![]);

    let (status, body) = send(
        &test.router,
        get("/api/journey/calendar?year=2024&month=13", Some(ALICE_TOKEN)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn calendar_rejects_non_numeric_params_as_json() {
    let test = app(vec![]);

    for uri in [
        "/api/journey/calendar?year=twenty&month=1",
        "/api/journey/calendar?month=jan",
    ] {
        let (status, body) = send(&test.router, get(uri, Some(ALICE_TOKEN))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["code"], "VALIDATION_FAILED", "{}", uri);
        assert!(body["message"].is_string(), "{}", uri);
    }
}

#[tokio::test]
async fn malformed_entry_body_returns_json_error() {
    let test = app(vec![]);
    let request = Request::builder()
        .method("POST")
        .uri("/api/coffee")
        .header(header::AUTHORIZATION, format!("Bearer {}", ALICE_TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"origin_country\": "))
        .unwrap();

    let (status, body) = send(&test.router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(test.entries.len().await, 0);
}

#[tokio::test]
async fn passport_filters_by_rarity() {
    let test = app(alice_journal());

    let (status, body) = send(
        &test.router,
        get("/api/journey/passport?rarity=legendary", Some(ALICE_TOKEN)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let stamps = body["data"]["stamps"].as_array().unwrap();
    assert_eq!(stamps.len(), 2);
    assert!(stamps.iter().all(|s| s["rarity"] == "legendary"));
    assert_eq!(body["data"]["unlocked_count"], 2);

    let (status, _) = send(
        &test.router,
        get("/api/journey/passport?rarity=mythic", Some(ALICE_TOKEN)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ════════════════════════════════════════════════════════════════════════════
// Community
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn community_ranks_all_users() {
    let test = app(alice_journal());

    let (status, body) = send(&test.router, get("/api/community", Some(BOB_TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["total_coffees"], 5);
    assert_eq!(data["top_countries"][0], json!({"country": "ET", "count": 2}));
    assert_eq!(data["top_countries"].as_array().unwrap().len(), 3);
    assert_eq!(data["user_countries"], json!(["BR"]));
    assert_eq!(data["friend_code"], "BOB");
}

// ════════════════════════════════════════════════════════════════════════════
// Photo upload
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn upload_stores_photo_and_returns_url() {
    let test = app(vec![]);

    let (status, body) = send(
        &test.router,
        upload(ALICE_TOKEN, "latte.png", "image/png", b"\x89PNG fake bytes"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let path = body["path"].as_str().unwrap();
    assert!(path.starts_with("alice/"));
    assert!(path.ends_with(".png"));
    assert_eq!(body["url"], format!("https://cdn.test/photos/{}", path));
    assert!(test.photos.get(path).await.is_some());
}

#[tokio::test]
async fn upload_rejects_unsupported_type() {
    let test = app(vec![]);

    let (status, body) = send(
        &test.router,
        upload(ALICE_TOKEN, "menu.pdf", "application/pdf", b"%PDF-1.7"),
    )
    .await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["code"], "UNSUPPORTED_MEDIA_TYPE");
}

#[tokio::test]
async fn upload_rejects_oversize_file() {
    let test = app_with(
        vec![],
        RouterOptions {
            max_upload_bytes: 16,
            ..RouterOptions::default()
        },
    );

    let (status, body) = send(
        &test.router,
        upload(ALICE_TOKEN, "big.jpg", "image/jpeg", &[0u8; 64]),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn upload_requires_authentication() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=x")
        .body(Body::from("--x--\r\n"))
        .unwrap();

    let (status, _) = send(&app(vec![]).router, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ════════════════════════════════════════════════════════════════════════════
// Profile
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn profile_shows_email_and_journey_totals() {
    let test = app(alice_journal());

    let (status, body) = send(&test.router, get("/api/profile", Some(ALICE_TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["email"], "alice@test.example.com");
    assert_eq!(data["member_since"], Value::Null);
    assert_eq!(data["profile_picture_url"], Value::Null);
    assert_eq!(data["total_entries"], 4);
    assert_eq!(data["unique_countries"], 3);
    assert!(!test.profiles.contains(&UserId::new("alice").unwrap()).await);
}

#[tokio::test]
async fn profile_reports_member_since_after_first_entry() {
    let test = app(vec![]);
    send(
        &test.router,
        post_json("/api/coffee", ALICE_TOKEN, json!({ "origin_country": "CO" })),
    )
    .await;

    let (status, body) = send(&test.router, get("/api/profile", Some(ALICE_TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["member_since"].is_string());
    assert_eq!(body["data"]["total_entries"], 1);
}

#[tokio::test]
async fn profile_picture_upload_replaces_avatar() {
    let test = app(vec![]);

    let (status, body) = send(
        &test.router,
        multipart_to(
            "/api/profile/picture",
            ALICE_TOKEN,
            "me.webp",
            "image/webp",
            b"RIFF fake webp",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let path = body["path"].as_str().unwrap().to_string();
    assert!(path.starts_with("profile-pictures/alice-"));
    assert!(path.ends_with(".webp"));
    assert_eq!(body["url"], format!("https://cdn.test/avatars/{}", path));
    assert!(test.avatars.get(&path).await.is_some());
    assert!(test.photos.get(&path).await.is_none());

    let (_, body) = send(&test.router, get("/api/profile", Some(ALICE_TOKEN))).await;
    assert_eq!(
        body["data"]["profile_picture_url"],
        format!("https://cdn.test/avatars/{}", path)
    );
    assert!(body["data"]["member_since"].is_string());
}

#[tokio::test]
async fn profile_picture_rejects_non_images() {
    let test = app(vec![]);

    let (status, body) = send(
        &test.router,
        multipart_to(
            "/api/profile/picture",
            ALICE_TOKEN,
            "cv.pdf",
            "application/pdf",
            b"%PDF-1.7",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["code"], "UNSUPPORTED_MEDIA_TYPE");
    assert!(!test.profiles.contains(&UserId::new("alice").unwrap()).await);
}

#[tokio::test]
async fn profile_requires_authentication() {
    let (status, _) = send(&app(vec![]).router, get("/api/profile", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn offline_profile_reads_but_refuses_pictures() {
    let router = offline_app();

    let (status, body) = send(&router, get("/api/profile", Some(BOB_TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_entries"], 0);

    let (status, body) = send(
        &router,
        multipart_to(
            "/api/profile/picture",
            BOB_TOKEN,
            "me.png",
            "image/png",
            b"\x89PNG",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "BACKEND_UNAVAILABLE");
}
