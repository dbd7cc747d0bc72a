//! Handlers for reservations.
//!
//! Creation checks the referenced car and user up front so a bad foreign
//! key surfaces as a 404 naming the missing entity instead of a raw
//! constraint violation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use showroom_core::error::CoreError;
use showroom_core::pagination::{clamp_limit, clamp_page, Pagination};
use showroom_core::types::DbId;
use showroom_db::models::reservation::{CreateReservation, UpdateReservation};
use showroom_db::repositories::{CarRepo, ReservationRepo, UserRepo};

use crate::error::AppResult;
use crate::query::{normalize_search, ReservationListParams};
use crate::response::{Envelope, PageData};
use crate::state::AppState;

/// GET /api/v1/reservations
///
/// Paginated reservation listing with optional user-name search and
/// status/car filters. Rows embed the reserving user's summary.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ReservationListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);
    let search = normalize_search(&params.search);

    let items = ReservationRepo::list(
        &state.pool,
        search,
        params.status_id,
        params.car_id,
        limit,
        Pagination::offset(page, limit),
    )
    .await?;
    let total =
        ReservationRepo::count(&state.pool, search, params.status_id, params.car_id).await?;

    Ok(Json(Envelope::ok(
        "Reservations fetched",
        PageData::new(items, page, limit, total),
    )))
}

/// GET /api/v1/reservations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let reservation = ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Reservation",
            id,
        })?;

    Ok(Json(Envelope::ok("Reservation fetched", reservation)))
}

/// POST /api/v1/reservations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateReservation>,
) -> AppResult<impl IntoResponse> {
    if CarRepo::find_by_id(&state.pool, input.car_id).await?.is_none() {
        return Err(CoreError::NotFound {
            entity: "Car",
            id: input.car_id,
        }
        .into());
    }
    if UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .is_none()
    {
        return Err(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }
        .into());
    }

    let reservation = ReservationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        reservation_id = reservation.id,
        car_id = reservation.car_id,
        user_id = reservation.user_id,
        "Reservation created",
    );

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Reservation created", reservation)),
    ))
}

/// PUT /api/v1/reservations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReservation>,
) -> AppResult<impl IntoResponse> {
    let reservation = ReservationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Reservation",
            id,
        })?;

    tracing::info!(reservation_id = id, "Reservation updated");

    Ok(Json(Envelope::ok("Reservation updated", reservation)))
}

/// DELETE /api/v1/reservations/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ReservationRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Reservation",
            id,
        }
        .into());
    }

    tracing::info!(reservation_id = id, "Reservation deleted");

    Ok(StatusCode::NO_CONTENT)
}
