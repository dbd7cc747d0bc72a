//! HTTP-level tests for [`PageFetcher`] against an in-process stub server.
//!
//! The stub serves the standard list envelope from an OS-assigned port, so
//! these tests exercise real request building, query-string encoding, and
//! envelope decoding without external services.

use std::collections::HashMap;
use std::net::SocketAddr;

use assert_matches::assert_matches;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use showroom_client::{
    ClientError, Combobox, ComboboxOptions, ComboboxView, FetchConfig, OptionId, PageFetcher,
    PageRequest, PageSource,
};

const PAGE_SIZE: i64 = 2;

/// Full car fixture; the stub filters and pages over this.
const CARS: &[(i64, &str, &str)] = &[
    (1, "Camry", "riyadh"),
    (2, "Corolla", "riyadh"),
    (3, "Land Cruiser", "riyadh"),
    (4, "Patrol", "jeddah"),
    (5, "Sunny", "jeddah"),
];

fn page_envelope(items: Vec<Value>, page: i64, total: i64, items_key: &str) -> Value {
    let pages = if total == 0 { 0 } else { (total + PAGE_SIZE - 1) / PAGE_SIZE };
    json!({
        "success": true,
        "message": "OK",
        "data": {
            items_key: items,
            "pagination": {"page": page, "limit": PAGE_SIZE, "total": total, "pages": pages},
        }
    })
}

fn paged<T: Clone>(rows: &[T], page: i64) -> Vec<T> {
    rows.iter()
        .skip(((page - 1) * PAGE_SIZE) as usize)
        .take(PAGE_SIZE as usize)
        .cloned()
        .collect()
}

async fn list_cars(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let page: i64 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let search = params.get("search").map(|s| s.to_lowercase());
    let branch = params.get("branch");

    let matching: Vec<Value> = CARS
        .iter()
        .filter(|(_, name, car_branch)| {
            search
                .as_deref()
                .is_none_or(|s| name.to_lowercase().contains(s))
                && branch.is_none_or(|b| b.as_str() == *car_branch)
        })
        .map(|(id, name, car_branch)| json!({"id": id, "name": name, "branch": car_branch}))
        .collect();

    let total = matching.len() as i64;
    Json(page_envelope(paged(&matching, page), page, total, "items"))
}

async fn list_reservations(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let page: i64 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    // Reservations have no name of their own; clients label them by the
    // nested user, falling back to a synthesized id label.
    let rows = vec![
        json!({"id": 11, "user": {"id": 1, "name": "Sara"}}),
        json!({"id": 12, "user": {"id": 2, "name": "Omar"}}),
        json!({"id": 13}),
    ];
    let total = rows.len() as i64;
    Json(page_envelope(paged(&rows, page), page, total, "items"))
}

async fn list_legacy_vehicles(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let page: i64 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let rows = vec![json!({"id": 1, "name": "Camry"})];
    Json(page_envelope(paged(&rows, page), page, 1, "vehicles"))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

/// Spawn the stub API on an OS-assigned port and return its address.
async fn spawn_stub() -> SocketAddr {
    let app = Router::new()
        .route("/api/v1/cars", get(list_cars))
        .route("/api/v1/reservations", get(list_reservations))
        .route("/legacy/vehicles", get(list_legacy_vehicles))
        .route("/api/v1/broken", get(broken));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub server");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server error");
    });

    addr
}

fn request(endpoint: &str, page: i64) -> PageRequest {
    PageRequest {
        endpoint: endpoint.into(),
        page,
        search: None,
        params: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// PageFetcher
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetches_and_maps_a_first_page() {
    let addr = spawn_stub().await;
    let fetcher = PageFetcher::new(format!("http://{addr}"), FetchConfig::default());

    let page = fetcher
        .fetch_page(&request("/api/v1/cars", 1))
        .await
        .unwrap();

    assert_eq!(page.options.len(), 2);
    assert_eq!(page.options[0].id, OptionId::Int(1));
    assert_eq!(page.options[0].name, "Camry");
    assert_eq!(page.next_page, Some(2));
    assert_eq!(page.total_pages, Some(3));
}

#[tokio::test]
async fn final_page_reports_no_next_page() {
    let addr = spawn_stub().await;
    let fetcher = PageFetcher::new(format!("http://{addr}"), FetchConfig::default());

    let page = fetcher
        .fetch_page(&request("/api/v1/cars", 3))
        .await
        .unwrap();

    assert_eq!(page.options.len(), 1);
    assert_eq!(page.next_page, None);
}

#[tokio::test]
async fn search_and_filter_params_reach_the_server() {
    let addr = spawn_stub().await;
    let fetcher = PageFetcher::new(format!("http://{addr}"), FetchConfig::default());

    let page = fetcher
        .fetch_page(&PageRequest {
            endpoint: "/api/v1/cars".into(),
            page: 1,
            search: Some("c".into()),
            params: vec![("branch".into(), "riyadh".into())],
        })
        .await
        .unwrap();

    // "c" matches Camry, Corolla, and Land Cruiser; all are riyadh cars,
    // and the first page holds two of them.
    assert_eq!(page.options.len(), 2);
    assert_eq!(page.total_pages, Some(2));
    assert!(page.options.iter().all(|o| o.name.to_lowercase().contains('c')));
}

#[tokio::test]
async fn name_falls_back_to_nested_user_then_synthesized_label() {
    let addr = spawn_stub().await;
    let fetcher = PageFetcher::new(
        format!("http://{addr}"),
        FetchConfig {
            page_size: Some(PAGE_SIZE),
            ..FetchConfig::default()
        },
    );

    let first = fetcher
        .fetch_page(&request("/api/v1/reservations", 1))
        .await
        .unwrap();
    assert_eq!(first.options[0].name, "Sara");
    assert_eq!(first.options[1].name, "Omar");

    let second = fetcher
        .fetch_page(&request("/api/v1/reservations", 2))
        .await
        .unwrap();
    assert_eq!(second.options[0].name, "Item 13");
}

#[tokio::test]
async fn custom_items_key_reads_foreign_envelopes() {
    let addr = spawn_stub().await;
    let fetcher = PageFetcher::new(
        format!("http://{addr}"),
        FetchConfig {
            items_key: "vehicles".into(),
            ..FetchConfig::default()
        },
    );

    let page = fetcher
        .fetch_page(&request("/legacy/vehicles", 1))
        .await
        .unwrap();

    assert_eq!(page.options.len(), 1);
    assert_eq!(page.options[0].name, "Camry");
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let addr = spawn_stub().await;
    let fetcher = PageFetcher::new(format!("http://{addr}"), FetchConfig::default());

    let result = fetcher.fetch_page(&request("/api/v1/broken", 1)).await;

    assert_matches!(result, Err(ClientError::Api { status: 500, .. }));
}

#[tokio::test]
async fn connection_failure_is_a_request_error() {
    // Nothing listens on this port; bind-and-drop reserves then frees it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = PageFetcher::new(format!("http://{addr}"), FetchConfig::default());
    let result = fetcher.fetch_page(&request("/api/v1/cars", 1)).await;

    assert_matches!(result, Err(ClientError::Request(_)));
}

// ---------------------------------------------------------------------------
// Combobox end-to-end over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn combobox_drives_search_and_pagination_over_http() {
    let addr = spawn_stub().await;
    let fetcher = PageFetcher::new(format!("http://{addr}"), FetchConfig::default());

    let mut control = Combobox::new(fetcher, ComboboxOptions::new("/api/v1/cars"));

    control.open().await.unwrap();
    match control.view() {
        ComboboxView::Results(options) => assert_eq!(options.len(), 2),
        other => panic!("expected results view, got {other:?}"),
    }

    // Scroll to the end: page 2 is appended after page 1.
    control.scrolled(700, 300, 1000).await.unwrap();
    match control.view() {
        ComboboxView::Results(options) => {
            assert_eq!(options.len(), 4);
            assert_eq!(options[0].name, "Camry");
            assert_eq!(options[3].name, "Patrol");
        }
        other => panic!("expected results view, got {other:?}"),
    }

    // A settled search restarts from page 1 with the new term.
    control.apply_search("sunny").await.unwrap();
    match control.view() {
        ComboboxView::Results(options) => {
            assert_eq!(options.len(), 1);
            assert_eq!(options[0].name, "Sunny");
        }
        other => panic!("expected results view, got {other:?}"),
    }

    let committed = control.select(0).unwrap();
    assert_eq!(committed.name, "Sunny");
    assert!(!control.is_open());
}
