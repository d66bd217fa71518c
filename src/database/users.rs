use crate::api::middleware::error::ApiResult;
use crate::database::Database;
use crate::models::User;
use sqlx::Row;

impl Database {
    pub async fn create_user(&self, user: &User) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO users (id, nickname, login_name, password_hash, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&user.id)
        .bind(&user.nickname)
        .bind(&user.login_name)
        .bind(&user.password_hash)
        .bind(&user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_user_by_id(&self, id: &str) -> ApiResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, nickname, login_name, password_hash, created_at
             FROM users
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(User {
                id: row.try_get("id")?,
                nickname: row.try_get("nickname")?,
                login_name: row.try_get("login_name")?,
                password_hash: row.try_get("password_hash")?,
                created_at: row.try_get("created_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    pub async fn get_user_by_login_name(&self, login_name: &str) -> ApiResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, nickname, login_name, password_hash, created_at
             FROM users
             WHERE login_name = ?",
        )
        .bind(login_name)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(User {
                id: row.try_get("id")?,
                nickname: row.try_get("nickname")?,
                login_name: row.try_get("login_name")?,
                password_hash: row.try_get("password_hash")?,
                created_at: row.try_get("created_at")?,
            }))
        } else {
            Ok(None)
        }
    }
}
