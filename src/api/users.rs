use crate::{
    api::middleware::{ApiError, ApiResult, AppState, CurrentUser},
    models::{SignupRequest, User, UserResponse},
    services::auth,
};
use axum::{extract::State, http::StatusCode, Extension, Json};

pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    if request.login_name.is_empty() || request.password.is_empty() {
        return Err(ApiError::BadRequest("invalid_parameters".to_string()));
    }

    if state
        .db
        .get_user_by_login_name(&request.login_name)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("duplicated".to_string()));
    }

    let password_hash = auth::hash_password(&request.password)?;
    let user = User::new(request.nickname, request.login_name, password_hash);
    state.db.create_user(&user).await?;

    tracing::info!("User created: id={}", user.id);
    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

pub async fn get_me(Extension(current): Extension<CurrentUser>) -> ApiResult<Json<UserResponse>> {
    Ok(Json(UserResponse::from(&current.user)))
}
