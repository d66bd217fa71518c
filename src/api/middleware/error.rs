use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// 401 `login_required`: endpoint needs a user session.
    LoginRequired,
    /// 401 `admin_login_required`: endpoint needs an administrator session.
    AdminLoginRequired,
    /// 401 `authentication_failed`: bad credentials at login.
    AuthenticationFailed,
    Forbidden(String),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::LoginRequired => write!(f, "Login required"),
            ApiError::AdminLoginRequired => write!(f, "Admin login required"),
            ApiError::AuthenticationFailed => write!(f, "Authentication failed"),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            ApiError::NotFound(code) => (StatusCode::NOT_FOUND, code),
            ApiError::BadRequest(code) => (StatusCode::BAD_REQUEST, code),
            ApiError::LoginRequired => (StatusCode::UNAUTHORIZED, "login_required".to_string()),
            ApiError::AdminLoginRequired => {
                (StatusCode::UNAUTHORIZED, "admin_login_required".to_string())
            }
            ApiError::AuthenticationFailed => {
                (StatusCode::UNAUTHORIZED, "authentication_failed".to_string())
            }
            ApiError::Forbidden(code) => (StatusCode::FORBIDDEN, code),
            ApiError::Conflict(code) => (StatusCode::CONFLICT, code),
            ApiError::Internal(code) => (StatusCode::INTERNAL_SERVER_ERROR, code),
        };

        let body = Json(json!({
            "error": code
        }));

        (status, body).into_response()
    }
}

// Convert from sqlx errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("not_found".to_string()),
            sqlx::Error::Database(db_err) => {
                // Check for unique constraint violations
                let message = db_err.message();
                if message.contains("UNIQUE") || message.contains("unique") {
                    ApiError::Conflict("duplicated".to_string())
                } else {
                    ApiError::Internal(format!("Database error: {}", message))
                }
            }
            _ => ApiError::Internal("Internal server error".to_string()),
        }
    }
}

// Convert from argon2 errors
impl From<argon2::password_hash::Error> for ApiError {
    fn from(_: argon2::password_hash::Error) -> Self {
        ApiError::Internal("Password hashing error".to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
