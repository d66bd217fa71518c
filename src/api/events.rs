use crate::{
    api::middleware::{ApiError, ApiResult, AppState, CurrentUser},
    models::EventResponse,
    services::availability,
};
use axum::{
    extract::{Path, State},
    Extension, Json,
};

/// Public event listing: public events only, counts without seat detail,
/// admin-only fields stripped.
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<EventResponse>>> {
    let events = availability::get_events(&state.db, false)
        .await?
        .into_iter()
        .map(EventResponse::sanitize)
        .collect();

    Ok(Json(events))
}

/// Full seat map of one public event. The viewer, when logged in, sees
/// their own seats flagged `mine`.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    viewer: Option<Extension<CurrentUser>>,
) -> ApiResult<Json<EventResponse>> {
    let login_user_id = viewer.as_ref().map(|ext| ext.user.id.as_str());
    let event = availability::get_event(&state.db, &id, login_user_id).await?;

    if event.public != Some(true) {
        return Err(ApiError::NotFound("not_found".to_string()));
    }

    Ok(Json(event.sanitize()))
}
