use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub nickname: String,
    pub login_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
}

impl User {
    pub fn new(nickname: String, login_name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            nickname,
            login_name,
            password_hash,
            created_at: now_rfc3339(),
        }
    }
}

/// Administrators are a separate principal from users: different table,
/// different login endpoint, different session kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Administrator {
    pub id: String,
    pub nickname: String,
    pub login_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
}

impl Administrator {
    pub fn new(nickname: String, login_name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            nickname,
            login_name,
            password_hash,
            created_at: now_rfc3339(),
        }
    }
}

/// RFC 3339 with fixed-width subseconds, so lexicographic ordering of the
/// TEXT columns matches chronological ordering. Every timestamp column in
/// the schema goes through this format, expiry comparisons included.
pub(crate) fn format_rfc3339(timestamp: time::OffsetDateTime) -> String {
    let format = time::macros::format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"
    );
    timestamp.format(&format).unwrap_or_default()
}

pub(crate) fn now_rfc3339() -> String {
    format_rfc3339(time::OffsetDateTime::now_utc())
}

// DTOs for API requests/responses
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub nickname: String,
    pub login_name: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub nickname: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            nickname: user.nickname.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdministratorResponse {
    pub id: String,
    pub nickname: String,
}

impl From<&Administrator> for AdministratorResponse {
    fn from(admin: &Administrator) -> Self {
        Self {
            id: admin.id.clone(),
            nickname: admin.nickname.clone(),
        }
    }
}
