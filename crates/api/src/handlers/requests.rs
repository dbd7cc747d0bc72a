//! Handlers for customer requests (test drives, inquiries, financing).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use showroom_core::error::CoreError;
use showroom_core::kinds::validate_request_kind;
use showroom_core::pagination::{clamp_limit, clamp_page, Pagination};
use showroom_core::types::DbId;
use showroom_db::models::request::{CreateRequest, UpdateRequest};
use showroom_db::repositories::{RequestRepo, UserRepo};

use crate::error::AppResult;
use crate::query::{normalize_search, RequestListParams};
use crate::response::{Envelope, PageData};
use crate::state::AppState;

/// GET /api/v1/requests
///
/// Paginated request listing with optional subject search and status
/// filter.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RequestListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);
    let search = normalize_search(&params.search);

    let items = RequestRepo::list(
        &state.pool,
        search,
        params.status_id,
        limit,
        Pagination::offset(page, limit),
    )
    .await?;
    let total = RequestRepo::count(&state.pool, search, params.status_id).await?;

    Ok(Json(Envelope::ok(
        "Requests fetched",
        PageData::new(items, page, limit, total),
    )))
}

/// GET /api/v1/requests/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let request = RequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Request",
            id,
        })?;

    Ok(Json(Envelope::ok("Request fetched", request)))
}

/// POST /api/v1/requests
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_request_kind(&input.kind)?;

    if let Some(user_id) = input.user_id {
        if UserRepo::find_by_id(&state.pool, user_id).await?.is_none() {
            return Err(CoreError::NotFound {
                entity: "User",
                id: user_id,
            }
            .into());
        }
    }

    let request = RequestRepo::create(&state.pool, &input).await?;

    tracing::info!(request_id = request.id, kind = %request.kind, "Request created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Request created", request)),
    ))
}

/// PUT /api/v1/requests/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRequest>,
) -> AppResult<impl IntoResponse> {
    let request = RequestRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Request",
            id,
        })?;

    tracing::info!(request_id = id, status_id = request.status_id, "Request updated");

    Ok(Json(Envelope::ok("Request updated", request)))
}

/// DELETE /api/v1/requests/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RequestRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Request",
            id,
        }
        .into());
    }

    tracing::info!(request_id = id, "Request deleted");

    Ok(StatusCode::NO_CONTENT)
}
