//! HTTP-level integration tests for reservation endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json, seed_car, seed_user};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_reservation_returns_201(pool: PgPool) {
    let car_id = seed_car(pool.clone(), "Camry", "riyadh").await;
    let user_id = seed_user(pool.clone(), "Sara", "sara@example.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/reservations",
        serde_json::json!({
            "car_id": car_id,
            "user_id": user_id,
            "scheduled_at": "2026-09-01T10:00:00Z",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    // Omitted status defaults to 1 (Pending).
    assert_eq!(json["data"]["status_id"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_reservation_with_unknown_car_returns_404(pool: PgPool) {
    let user_id = seed_user(pool.clone(), "Sara", "sara@example.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/reservations",
        serde_json::json!({
            "car_id": 999_999,
            "user_id": user_id,
            "scheduled_at": "2026-09-01T10:00:00Z",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("Car"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_reservations_embeds_user_summary(pool: PgPool) {
    let car_id = seed_car(pool.clone(), "Camry", "riyadh").await;
    let user_id = seed_user(pool.clone(), "Sara", "sara@example.com").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/reservations",
        serde_json::json!({
            "car_id": car_id,
            "user_id": user_id,
            "scheduled_at": "2026-09-01T10:00:00Z",
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/reservations").await;
    let json = body_json(response).await;

    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    // The user summary is nested so clients can label rows by user name.
    assert_eq!(items[0]["user"]["name"], "Sara");
    assert_eq!(items[0]["user"]["email"], "sara@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_reservations_searches_by_user_name(pool: PgPool) {
    let car_id = seed_car(pool.clone(), "Camry", "riyadh").await;
    let sara = seed_user(pool.clone(), "Sara", "sara@example.com").await;
    let omar = seed_user(pool.clone(), "Omar", "omar@example.com").await;

    for user_id in [sara, omar] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/reservations",
            serde_json::json!({
                "car_id": car_id,
                "user_id": user_id,
                "scheduled_at": "2026-09-01T10:00:00Z",
            }),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/reservations?search=oma").await;
    let json = body_json(response).await;

    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["user"]["name"], "Omar");
    assert_eq!(json["data"]["pagination"]["total"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_reservation_status(pool: PgPool) {
    let car_id = seed_car(pool.clone(), "Camry", "riyadh").await;
    let user_id = seed_user(pool.clone(), "Sara", "sara@example.com").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/reservations",
        serde_json::json!({
            "car_id": car_id,
            "user_id": user_id,
            "scheduled_at": "2026-09-01T10:00:00Z",
        }),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/reservations/{id}"),
        serde_json::json!({"status_id": 2}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status_id"], 2);
}
