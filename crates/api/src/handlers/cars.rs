//! Handlers for the car inventory.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use showroom_core::error::CoreError;
use showroom_core::pagination::{clamp_limit, clamp_page, Pagination};
use showroom_core::types::DbId;
use showroom_db::models::car::{CreateCar, UpdateCar};
use showroom_db::repositories::CarRepo;

use crate::error::AppResult;
use crate::query::{normalize_search, CarListParams};
use crate::response::{Envelope, PageData};
use crate::state::AppState;

/// GET /api/v1/cars
///
/// Paginated car listing with optional name/brand search and branch/status
/// filters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CarListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);
    let search = normalize_search(&params.search);
    let branch = params.branch.as_deref();

    let items = CarRepo::list(
        &state.pool,
        search,
        branch,
        params.status_id,
        limit,
        Pagination::offset(page, limit),
    )
    .await?;
    let total = CarRepo::count(&state.pool, search, branch, params.status_id).await?;

    Ok(Json(Envelope::ok(
        "Cars fetched",
        PageData::new(items, page, limit, total),
    )))
}

/// GET /api/v1/cars/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let car = CarRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Car", id })?;

    Ok(Json(Envelope::ok("Car fetched", car)))
}

/// POST /api/v1/cars
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCar>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let car = CarRepo::create(&state.pool, &input).await?;

    tracing::info!(car_id = car.id, branch = %car.branch, "Car created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Car created", car)),
    ))
}

/// PUT /api/v1/cars/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCar>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let car = CarRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Car", id })?;

    tracing::info!(car_id = id, "Car updated");

    Ok(Json(Envelope::ok("Car updated", car)))
}

/// DELETE /api/v1/cars/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CarRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(CoreError::NotFound { entity: "Car", id }.into());
    }

    tracing::info!(car_id = id, "Car deleted");

    Ok(StatusCode::NO_CONTENT)
}
