//! HTTP-level integration tests for customer request endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json, seed_user};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_request_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/requests",
        serde_json::json!({
            "kind": "test_drive",
            "subject": "Camry test drive",
            "message": "Saturday morning if possible.",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    // Omitted status defaults to 1 (New); user_id is optional.
    assert_eq!(json["data"]["status_id"], 1);
    assert!(json["data"]["user_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_request_with_unknown_kind_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/requests",
        serde_json::json!({
            "kind": "warranty",
            "subject": "Warranty claim",
            "message": "My warranty expired.",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("warranty"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_request_with_unknown_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/requests",
        serde_json::json!({
            "user_id": 999_999,
            "kind": "inquiry",
            "subject": "Pricing",
            "message": "What is the OTR price?",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_requests_filters_by_status(pool: PgPool) {
    let user_id = seed_user(pool.clone(), "Sara", "sara@example.com").await;

    for subject in ["First", "Second"] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/requests",
            serde_json::json!({
                "user_id": user_id,
                "kind": "inquiry",
                "subject": subject,
                "message": "Hello.",
            }),
        )
        .await;
    }

    // Resolve the first one.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/requests?search=first").await;
    let id = body_json(response).await["data"]["items"][0]["id"]
        .as_i64()
        .unwrap();

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/requests/{id}"),
        serde_json::json!({"status_id": 3}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/requests?status_id=3").await;
    let json = body_json(response).await;

    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["subject"], "First");
}
