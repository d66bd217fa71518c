use crate::api::middleware::error::{ApiError, ApiResult};
use crate::database::Database;
use crate::models::{Administrator, Session, SessionKind, User};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, ParamsBuilder,
};

/// Hash password using Argon2id with parameters:
/// - m_cost = 19456 KiB (19 MiB)
/// - t_cost = 2 iterations
/// - p_cost = 1 thread
pub fn hash_password(password: &str) -> ApiResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let params = ParamsBuilder::new()
        .m_cost(19456)
        .t_cost(2)
        .p_cost(1)
        .build()
        .map_err(|_| ApiError::Internal("Failed to build Argon2 params".to_string()))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify password against Argon2id hash
pub fn verify_password(password: &str, hash: &str) -> ApiResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| ApiError::Internal("Invalid password hash format".to_string()))?;

    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Generate secure random token for sessions (32 bytes = 64 hex characters)
pub fn generate_session_token() -> String {
    use rand::Rng;
    let bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(bytes)
}

/// Authenticate a user by login name and password and open a session.
/// Bad login name and bad password produce the same error.
pub async fn authenticate_user(
    db: &Database,
    login_name: &str,
    password: &str,
    session_duration_hours: i64,
) -> ApiResult<(User, Session)> {
    let user = db
        .get_user_by_login_name(login_name)
        .await?
        .ok_or(ApiError::AuthenticationFailed)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(ApiError::AuthenticationFailed);
    }

    let token = generate_session_token();
    let session = Session::new(
        user.id.clone(),
        SessionKind::User,
        token,
        session_duration_hours,
    );
    db.create_session(&session).await?;

    tracing::info!("User logged in: id={}", user.id);
    Ok((user, session))
}

/// Administrator counterpart of [`authenticate_user`].
pub async fn authenticate_administrator(
    db: &Database,
    login_name: &str,
    password: &str,
    session_duration_hours: i64,
) -> ApiResult<(Administrator, Session)> {
    let admin = db
        .get_administrator_by_login_name(login_name)
        .await?
        .ok_or(ApiError::AuthenticationFailed)?;

    if !verify_password(password, &admin.password_hash)? {
        return Err(ApiError::AuthenticationFailed);
    }

    let token = generate_session_token();
    let session = Session::new(
        admin.id.clone(),
        SessionKind::Admin,
        token,
        session_duration_hours,
    );
    db.create_session(&session).await?;

    tracing::info!("Administrator logged in: id={}", admin.id);
    Ok((admin, session))
}
