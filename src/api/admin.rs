use crate::{
    api::middleware::{ApiResult, AppState},
    models::{CreateEventRequest, EditEventRequest, EventResponse},
    services::{availability, event},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// Admin listing: every event, including non-public ones, with the
/// admin-only fields kept.
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<EventResponse>>> {
    let events = availability::get_events(&state.db, true).await?;
    Ok(Json(events))
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<(StatusCode, Json<EventResponse>)> {
    let response = event::create_event(&state.db, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<EventResponse>> {
    let response = availability::get_event(&state.db, &id, None).await?;
    Ok(Json(response))
}

pub async fn edit_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<EditEventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let response = event::edit_event(&state.db, &id, request).await?;
    Ok(Json(response))
}
