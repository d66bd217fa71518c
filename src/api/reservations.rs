use crate::{
    api::middleware::{ApiResult, AppState, CurrentUser},
    models::{ReserveRequest, ReserveResponse},
    services::reservation,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

pub async fn reserve(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(event_id): Path<String>,
    Json(request): Json<ReserveRequest>,
) -> ApiResult<(StatusCode, Json<ReserveResponse>)> {
    let response = reservation::reserve(
        &state.db,
        &event_id,
        &current.user.id,
        &request.sheet_rank,
    )
    .await?;

    Ok((StatusCode::ACCEPTED, Json(response)))
}

pub async fn cancel(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path((event_id, rank, num)): Path<(String, String, String)>,
) -> ApiResult<StatusCode> {
    reservation::cancel(&state.db, &event_id, &current.user.id, &rank, &num).await?;

    Ok(StatusCode::NO_CONTENT)
}
