use crate::api::middleware::AppState;
use crate::config::Config;
use crate::database::Database;
use crate::models::Administrator;
use crate::services::auth::hash_password;

/// Seed the configured administrator account on first start. Subsequent
/// starts with the same login name are a no-op.
pub async fn initialize_admin(
    db: &Database,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    if db
        .get_administrator_by_login_name(&config.admin_login_name)
        .await?
        .is_some()
    {
        tracing::debug!("Administrator already exists, skipping seed");
        return Ok(());
    }

    let password_hash = hash_password(&config.admin_password)?;
    let admin = Administrator::new(
        "admin".to_string(),
        config.admin_login_name.clone(),
        password_hash,
    );
    db.create_administrator(&admin).await?;

    tracing::info!("Administrator seeded: login_name={}", admin.login_name);
    Ok(())
}

pub fn build_app_state(db: Database, config: &Config) -> AppState {
    AppState {
        db,
        session_duration_hours: config.session_duration_hours,
    }
}
