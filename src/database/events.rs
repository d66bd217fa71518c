use crate::api::middleware::error::{ApiError, ApiResult};
use crate::database::Database;
use crate::models::Event;
use sqlx::Row;

fn event_from_row(row: &sqlx::any::AnyRow) -> ApiResult<Event> {
    // public_fg/closed_fg are INTEGER columns; AnyPool has no bool decode
    // for MySQL TINYINT, so read i32 and compare.
    let public: i32 = row.try_get("public_fg")?;
    let closed: i32 = row.try_get("closed_fg")?;

    Ok(Event {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        public: public != 0,
        closed: closed != 0,
        price: row.try_get("price")?,
        created_at: row.try_get("created_at")?,
    })
}

impl Database {
    pub async fn create_event(&self, event: &Event) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO events (id, title, public_fg, closed_fg, price, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&event.id)
        .bind(&event.title)
        .bind(event.public as i32)
        .bind(event.closed as i32)
        .bind(event.price)
        .bind(&event.created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!("Event created: id={}, title={}", event.id, event.title);
        Ok(())
    }

    pub async fn get_event_by_id(&self, id: &str) -> ApiResult<Option<Event>> {
        let row = sqlx::query(
            "SELECT id, title, public_fg, closed_fg, price, created_at
             FROM events
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(event_from_row(&row)?))
        } else {
            Ok(None)
        }
    }

    /// All events in creation order. Visibility filtering happens in the
    /// service layer, where the viewer is known.
    pub async fn list_events(&self) -> ApiResult<Vec<Event>> {
        let rows = sqlx::query(
            "SELECT id, title, public_fg, closed_fg, price, created_at
             FROM events
             ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut events = Vec::new();
        for row in rows {
            events.push(event_from_row(&row)?);
        }

        Ok(events)
    }

    pub async fn update_event_flags(&self, id: &str, public: bool, closed: bool) -> ApiResult<()> {
        let result = sqlx::query(
            "UPDATE events
             SET public_fg = ?, closed_fg = ?
             WHERE id = ?",
        )
        .bind(public as i32)
        .bind(closed as i32)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("not_found".to_string()));
        }

        tracing::info!(
            "Event flags updated: id={}, public={}, closed={}",
            id,
            public,
            closed
        );
        Ok(())
    }
}
