//! Handlers for user management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use showroom_core::error::CoreError;
use showroom_core::pagination::{clamp_limit, clamp_page, Pagination};
use showroom_core::types::DbId;
use showroom_db::models::user::{CreateUser, UpdateUser};
use showroom_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::query::{normalize_search, ListParams};
use crate::response::{Envelope, PageData};
use crate::state::AppState;

/// GET /api/v1/users
///
/// Paginated user listing with optional name/email search.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);
    let search = normalize_search(&params.search);

    let items = UserRepo::list(&state.pool, search, limit, Pagination::offset(page, limit)).await?;
    let total = UserRepo::count(&state.pool, search).await?;

    Ok(Json(Envelope::ok(
        "Users fetched",
        PageData::new(items, page, limit, total),
    )))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;

    Ok(Json(Envelope::ok("User fetched", user)))
}

/// POST /api/v1/users
///
/// Duplicate emails are rejected with 409 via the `uq_users_email`
/// constraint.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("User created", user)),
    ))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;

    tracing::info!(user_id = id, "User updated");

    Ok(Json(Envelope::ok("User updated", user)))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = UserRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(CoreError::NotFound { entity: "User", id }.into());
    }

    tracing::info!(user_id = id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
