use crate::models::user::format_rfc3339;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which principal a session belongs to. Users and administrators live in
/// separate tables and log in through separate endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    User,
    Admin,
}

impl SessionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::User => "user",
            SessionKind::Admin => "admin",
        }
    }
}

impl std::str::FromStr for SessionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(SessionKind::User),
            "admin" => Ok(SessionKind::Admin),
            _ => Err(format!("Invalid session kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub kind: SessionKind,
    pub token: String,
    pub expires_at: String,
    pub created_at: String,
}

impl Session {
    pub fn new(user_id: String, kind: SessionKind, token: String, duration_hours: i64) -> Self {
        let now = time::OffsetDateTime::now_utc();
        let expires_at = now + time::Duration::hours(duration_hours);

        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            kind,
            token,
            expires_at: format_rfc3339(expires_at),
            created_at: format_rfc3339(now),
        }
    }

    pub fn is_expired(&self) -> bool {
        if let Ok(expires_at) = time::OffsetDateTime::parse(
            &self.expires_at,
            &time::format_description::well_known::Rfc3339,
        ) {
            expires_at < time::OffsetDateTime::now_utc()
        } else {
            true
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login_name: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: String,
    pub id: String,
    pub nickname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_not_expired() {
        let session = Session::new("u1".to_string(), SessionKind::User, "tok".to_string(), 1);
        assert!(!session.is_expired());
    }

    #[test]
    fn test_negative_duration_expired() {
        let session = Session::new("u1".to_string(), SessionKind::Admin, "tok".to_string(), -1);
        assert!(session.is_expired());
    }

    #[test]
    fn test_expiry_comparable_as_text() {
        // expires_at and the cleanup bind use the same fixed-width format,
        // so a plain string comparison agrees with chronological order.
        let live = Session::new("u1".to_string(), SessionKind::User, "tok".to_string(), 1);
        let dead = Session::new("u1".to_string(), SessionKind::User, "tok".to_string(), -1);
        let now = crate::models::user::now_rfc3339();

        assert!(live.expires_at.as_str() > now.as_str());
        assert!(dead.expires_at.as_str() < now.as_str());
        for session in [&live, &dead] {
            let (_, frac) = session.expires_at.split_once('.').unwrap();
            assert_eq!(frac.len(), 7, "six subsecond digits plus Z");
        }
    }

    #[test]
    fn test_garbage_expiry_counts_as_expired() {
        let mut session = Session::new("u1".to_string(), SessionKind::User, "tok".to_string(), 1);
        session.expires_at = "not-a-timestamp".to_string();
        assert!(session.is_expired());
    }
}
