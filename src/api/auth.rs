use crate::{
    api::middleware::{
        ApiResult, AppState, CurrentAdministrator, CurrentUser, SESSION_COOKIE,
    },
    models::{LoginRequest, LoginResponse},
    services::auth,
};
use axum::{extract::State, http::StatusCode, Extension, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};

fn session_cookie(token: String, duration_hours: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::hours(duration_hours))
        .build()
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let (user, session) = auth::authenticate_user(
        &state.db,
        &request.login_name,
        &request.password,
        state.session_duration_hours,
    )
    .await?;

    let jar = jar.add(session_cookie(
        session.token.clone(),
        state.session_duration_hours,
    ));

    Ok((
        jar,
        Json(LoginResponse {
            token: session.token,
            expires_at: session.expires_at,
            id: user.id,
            nickname: user.nickname,
        }),
    ))
}

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    Extension(current): Extension<CurrentUser>,
) -> ApiResult<(CookieJar, StatusCode)> {
    state.db.delete_session(&current.token).await?;
    let jar = jar.remove(Cookie::from(SESSION_COOKIE));

    Ok((jar, StatusCode::NO_CONTENT))
}

pub async fn admin_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let (admin, session) = auth::authenticate_administrator(
        &state.db,
        &request.login_name,
        &request.password,
        state.session_duration_hours,
    )
    .await?;

    let jar = jar.add(session_cookie(
        session.token.clone(),
        state.session_duration_hours,
    ));

    Ok((
        jar,
        Json(LoginResponse {
            token: session.token,
            expires_at: session.expires_at,
            id: admin.id,
            nickname: admin.nickname,
        }),
    ))
}

pub async fn admin_logout(
    State(state): State<AppState>,
    jar: CookieJar,
    Extension(current): Extension<CurrentAdministrator>,
) -> ApiResult<(CookieJar, StatusCode)> {
    state.db.delete_session(&current.token).await?;
    let jar = jar.remove(Cookie::from(SESSION_COOKIE));

    Ok((jar, StatusCode::NO_CONTENT))
}
