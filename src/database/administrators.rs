use crate::api::middleware::error::ApiResult;
use crate::database::Database;
use crate::models::Administrator;
use sqlx::Row;

impl Database {
    pub async fn create_administrator(&self, admin: &Administrator) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO administrators (id, nickname, login_name, password_hash, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&admin.id)
        .bind(&admin.nickname)
        .bind(&admin.login_name)
        .bind(&admin.password_hash)
        .bind(&admin.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_administrator_by_id(&self, id: &str) -> ApiResult<Option<Administrator>> {
        let row = sqlx::query(
            "SELECT id, nickname, login_name, password_hash, created_at
             FROM administrators
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Administrator {
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

    pub async fn get_administrator_by_login_name(
        &self,
        login_name: &str,
    ) -> ApiResult<Option<Administrator>> {
        let row = sqlx::query(
            "SELECT id, nickname, login_name, password_hash, created_at
             FROM administrators
             WHERE login_name = ?",
        )
        .bind(login_name)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Administrator {
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
