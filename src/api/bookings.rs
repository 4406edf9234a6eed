//! Equipment booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::Booking, AppState};

/// List all bookings
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    responses(
        (status = 200, description = "All bookings", body = Vec<Booking>)
    )
)]
pub async fn list_bookings(State(state): State<AppState>) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.bookings.list().await?;
    Ok(Json(bookings))
}

/// Get booking by ID
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = Booking),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.get(id).await?;
    Ok(Json(booking))
}

/// Create booking; any identity in the body is replaced by a new one
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = Booking,
    responses(
        (status = 200, description = "Booking created", body = Booking)
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(data): Json<Booking>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.create(data).await?;
    Ok(Json(booking))
}

/// Replace booking, inserting it under the given ID if it does not exist
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i64, Path, description = "Booking ID")),
    request_body = Booking,
    responses(
        (status = 200, description = "Booking replaced in place, or inserted under the path ID when absent; the body is the stored record either way", body = Booking)
    )
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<Booking>,
) -> AppResult<Json<Booking>> {
    let saved = state.services.bookings.update(id, data).await?;
    Ok(Json(saved.into_inner()))
}

/// Delete booking
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted, or did not exist")
    )
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.bookings.delete(id).await?;
    Ok(StatusCode::OK)
}
