use crate::api::middleware::error::ApiResult;
use crate::database::Database;
use crate::models::Reservation;
use sqlx::Row;

fn reservation_from_row(row: &sqlx::any::AnyRow) -> ApiResult<Reservation> {
    Ok(Reservation {
        id: row.try_get("id")?,
        event_id: row.try_get("event_id")?,
        sheet_id: row.try_get("sheet_id")?,
        user_id: row.try_get("user_id")?,
        reserved_at: row.try_get("reserved_at")?,
        canceled_at: row.try_get("canceled_at").ok(),
    })
}

impl Database {
    /// Insert a reservation, but only if the seat has no active reservation
    /// for this event. Runs the re-check and the insert in one transaction;
    /// returns false when the seat was taken in the meantime.
    pub async fn try_create_reservation(&self, reservation: &Reservation) -> ApiResult<bool> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            "SELECT COUNT(*) as count
             FROM reservations
             WHERE event_id = ? AND sheet_id = ? AND canceled_at IS NULL",
        )
        .bind(&reservation.event_id)
        .bind(reservation.sheet_id)
        .fetch_one(&mut *tx)
        .await?;

        let count: i64 = row.try_get("count")?;
        if count > 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO reservations (id, event_id, sheet_id, user_id, reserved_at, canceled_at)
             VALUES (?, ?, ?, ?, ?, NULL)",
        )
        .bind(&reservation.id)
        .bind(&reservation.event_id)
        .bind(reservation.sheet_id)
        .bind(&reservation.user_id)
        .bind(&reservation.reserved_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Reservation created: id={}, event={}, sheet={}",
            reservation.id,
            reservation.event_id,
            reservation.sheet_id
        );
        Ok(true)
    }

    /// All non-canceled reservations for an event, one query. The
    /// availability aggregation walks this list against the fixed layout.
    pub async fn list_active_reservations(&self, event_id: &str) -> ApiResult<Vec<Reservation>> {
        let rows = sqlx::query(
            "SELECT id, event_id, sheet_id, user_id, reserved_at, canceled_at
             FROM reservations
             WHERE event_id = ? AND canceled_at IS NULL",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        let mut reservations = Vec::new();
        for row in rows {
            reservations.push(reservation_from_row(&row)?);
        }

        Ok(reservations)
    }

    /// The active reservation holding a seat, if any. When duplicates exist
    /// the earliest `reserved_at` wins.
    pub async fn get_active_reservation(
        &self,
        event_id: &str,
        sheet_id: i64,
    ) -> ApiResult<Option<Reservation>> {
        let row = sqlx::query(
            "SELECT id, event_id, sheet_id, user_id, reserved_at, canceled_at
             FROM reservations
             WHERE event_id = ? AND sheet_id = ? AND canceled_at IS NULL
             ORDER BY reserved_at ASC
             LIMIT 1",
        )
        .bind(event_id)
        .bind(sheet_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(reservation_from_row(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn cancel_reservation(&self, id: &str) -> ApiResult<()> {
        let now = crate::models::user::now_rfc3339();

        sqlx::query(
            "UPDATE reservations
             SET canceled_at = ?
             WHERE id = ? AND canceled_at IS NULL",
        )
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        tracing::info!("Reservation canceled: id={}", id);
        Ok(())
    }
}
