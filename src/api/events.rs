//! Event endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::Event, AppState};

/// List all events
#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    responses(
        (status = 200, description = "All events", body = Vec<Event>)
    )
)]
pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = state.services.events.list().await?;
    Ok(Json(events))
}

/// Get event by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "events",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event details", body = Event),
        (status = 404, description = "Event not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Event>> {
    let event = state.services.events.get(id).await?;
    Ok(Json(event))
}

/// Create event; any identity in the body is replaced by a new one
#[utoipa::path(
    post,
    path = "/events",
    tag = "events",
    request_body = Event,
    responses(
        (status = 200, description = "Event created", body = Event)
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(data): Json<Event>,
) -> AppResult<Json<Event>> {
    let event = state.services.events.create(data).await?;
    Ok(Json(event))
}

/// Replace event, inserting it under the given ID if it does not exist
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "events",
    params(("id" = i64, Path, description = "Event ID")),
    request_body = Event,
    responses(
        (status = 200, description = "Event replaced in place, or inserted under the path ID when absent; the body is the stored record either way", body = Event)
    )
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<Event>,
) -> AppResult<Json<Event>> {
    let saved = state.services.events.update(id, data).await?;
    Ok(Json(saved.into_inner()))
}

/// Delete event
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "events",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event deleted, or did not exist")
    )
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.events.delete(id).await?;
    Ok(StatusCode::OK)
}
