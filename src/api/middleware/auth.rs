use crate::{
    api::middleware::error::ApiError,
    database::Database,
    models::{Administrator, SessionKind, User},
};
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

/// Cookie the session token travels in. A bearer `Authorization` header is
/// accepted as well for non-browser clients.
pub const SESSION_COOKIE: &str = "session_token";

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub session_duration_hours: i64,
}

/// The logged-in user, resolved once per request and stored in request
/// extensions for handlers to pick up.
#[derive(Clone)]
pub struct CurrentUser {
    pub user: User,
    pub token: String,
}

/// Same for the administrator side.
#[derive(Clone)]
pub struct CurrentAdministrator {
    pub administrator: Administrator,
    pub token: String,
}

fn extract_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }

    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from)
}

async fn resolve_session(
    state: &AppState,
    headers: &HeaderMap,
    kind: SessionKind,
) -> Result<(String, String), ApiError> {
    let unauthorized = || match kind {
        SessionKind::User => ApiError::LoginRequired,
        SessionKind::Admin => ApiError::AdminLoginRequired,
    };

    let token = extract_token(headers).ok_or_else(unauthorized)?;

    let session = state
        .db
        .get_session_by_token(&token)
        .await?
        .ok_or_else(unauthorized)?;

    if session.is_expired() {
        // Delete expired session
        state.db.delete_session(&token).await.ok();
        return Err(unauthorized());
    }

    if session.kind != kind {
        return Err(unauthorized());
    }

    Ok((session.user_id, token))
}

/// Require a valid user session and store [`CurrentUser`] in request
/// extensions.
pub async fn require_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (user_id, token) = resolve_session(&state, request.headers(), SessionKind::User).await?;

    let user = state
        .db
        .get_user_by_id(&user_id)
        .await?
        .ok_or(ApiError::LoginRequired)?;

    request.extensions_mut().insert(CurrentUser { user, token });

    Ok(next.run(request).await)
}

/// Require a valid administrator session and store [`CurrentAdministrator`]
/// in request extensions.
pub async fn require_administrator(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (admin_id, token) = resolve_session(&state, request.headers(), SessionKind::Admin).await?;

    let administrator = state
        .db
        .get_administrator_by_id(&admin_id)
        .await?
        .ok_or(ApiError::AdminLoginRequired)?;

    request
        .extensions_mut()
        .insert(CurrentAdministrator {
            administrator,
            token,
        });

    Ok(next.run(request).await)
}

/// Resolve the viewer if a valid user session is present, without failing
/// the request otherwise. Lets public event views mark seats as `mine`.
pub async fn fill_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Ok((user_id, token)) = resolve_session(&state, request.headers(), SessionKind::User).await {
        if let Ok(Some(user)) = state.db.get_user_by_id(&user_id).await {
            request.extensions_mut().insert(CurrentUser { user, token });
        }
    }

    next.run(request).await
}
