//! Event check-in endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::CheckIn, AppState};

/// List all check-ins
#[utoipa::path(
    get,
    path = "/checkins",
    tag = "checkins",
    responses(
        (status = 200, description = "All check-ins", body = Vec<CheckIn>)
    )
)]
pub async fn list_checkins(State(state): State<AppState>) -> AppResult<Json<Vec<CheckIn>>> {
    let checkins = state.services.checkins.list().await?;
    Ok(Json(checkins))
}

/// Get check-in by ID
#[utoipa::path(
    get,
    path = "/checkins/{id}",
    tag = "checkins",
    params(("id" = i64, Path, description = "Check-in ID")),
    responses(
        (status = 200, description = "Check-in details", body = CheckIn),
        (status = 404, description = "Check-in not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_checkin(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CheckIn>> {
    let checkin = state.services.checkins.get(id).await?;
    Ok(Json(checkin))
}

/// Create check-in; any identity in the body is replaced by a new one
#[utoipa::path(
    post,
    path = "/checkins",
    tag = "checkins",
    request_body = CheckIn,
    responses(
        (status = 200, description = "Check-in created", body = CheckIn)
    )
)]
pub async fn create_checkin(
    State(state): State<AppState>,
    Json(data): Json<CheckIn>,
) -> AppResult<Json<CheckIn>> {
    let checkin = state.services.checkins.create(data).await?;
    Ok(Json(checkin))
}

/// Replace check-in, inserting it under the given ID if it does not exist
#[utoipa::path(
    put,
    path = "/checkins/{id}",
    tag = "checkins",
    params(("id" = i64, Path, description = "Check-in ID")),
    request_body = CheckIn,
    responses(
        (status = 200, description = "Check-in replaced in place, or inserted under the path ID when absent; the body is the stored record either way", body = CheckIn)
    )
)]
pub async fn update_checkin(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<CheckIn>,
) -> AppResult<Json<CheckIn>> {
    let saved = state.services.checkins.update(id, data).await?;
    Ok(Json(saved.into_inner()))
}

/// Delete check-in
#[utoipa::path(
    delete,
    path = "/checkins/{id}",
    tag = "checkins",
    params(("id" = i64, Path, description = "Check-in ID")),
    responses(
        (status = 200, description = "Check-in deleted, or did not exist")
    )
)]
pub async fn delete_checkin(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.checkins.delete(id).await?;
    Ok(StatusCode::OK)
}
