//! HTTP-level integration tests for the marketing content endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn seed_hero_banner(pool: PgPool, title: &str, position: i32, is_active: bool) -> i64 {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/content/hero-banners",
        serde_json::json!({
            "title": title,
            "image_url": "https://cdn.example.com/banner.jpg",
            "position": position,
            "is_active": is_active,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Hero banner CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn hero_banner_crud_roundtrip(pool: PgPool) {
    let id = seed_hero_banner(pool.clone(), "Summer offers", 1, true).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/content/hero-banners/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Summer offers");

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/content/hero-banners/{id}"),
        serde_json::json!({"is_active": false}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_active"], false);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/content/hero-banners/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/content/hero-banners/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Media kind validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_media_item_with_unknown_kind_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/content/media-items",
        serde_json::json!({
            "title": "Launch keynote",
            "kind": "audio",
            "url": "https://cdn.example.com/keynote.mp3",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("audio"));
}

// ---------------------------------------------------------------------------
// Announcement search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn announcements_search_by_title(pool: PgPool) {
    for title in ["New branch opening", "Eid working hours"] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/content/announcements",
            serde_json::json!({"title": title, "body": "Details inside."}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/content/announcements?search=branch").await;
    let json = body_json(response).await;

    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "New branch opening");
}

// ---------------------------------------------------------------------------
// Public marketing payload
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn public_home_returns_active_sections_in_position_order(pool: PgPool) {
    seed_hero_banner(pool.clone(), "Second", 2, true).await;
    seed_hero_banner(pool.clone(), "First", 1, true).await;
    seed_hero_banner(pool.clone(), "Hidden", 0, false).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/public/home").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let banners = json["data"]["hero_banners"].as_array().unwrap();
    // The inactive banner is excluded; the rest are position-ordered.
    assert_eq!(banners.len(), 2);
    assert_eq!(banners[0]["title"], "First");
    assert_eq!(banners[1]["title"], "Second");

    assert!(json["data"]["about_sections"].as_array().unwrap().is_empty());
    assert!(json["data"]["core_values"].as_array().unwrap().is_empty());
}
