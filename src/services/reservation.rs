use crate::api::middleware::error::{ApiError, ApiResult};
use crate::database::Database;
use crate::models::{Reservation, ReserveResponse, Sheet, SheetRank};
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::str::FromStr;

/// Reserve a random free seat of the requested rank. The candidate list is
/// computed optimistically; the insert re-checks inside a transaction and
/// we move on to the next candidate when someone else got there first.
pub async fn reserve(
    db: &Database,
    event_id: &str,
    user_id: &str,
    rank: &str,
) -> ApiResult<ReserveResponse> {
    let event = db
        .get_event_by_id(event_id)
        .await?
        .filter(|e| e.public)
        .ok_or_else(|| ApiError::NotFound("invalid_event".to_string()))?;

    if event.closed {
        return Err(ApiError::BadRequest("invalid_event".to_string()));
    }

    let rank =
        SheetRank::from_str(rank).map_err(|_| ApiError::BadRequest("invalid_rank".to_string()))?;

    let reserved: HashSet<i64> = db
        .list_active_reservations(event_id)
        .await?
        .into_iter()
        .map(|r| r.sheet_id)
        .collect();

    let mut candidates: Vec<i64> = (rank.first_id()..rank.first_id() + rank.capacity())
        .filter(|id| !reserved.contains(id))
        .collect();
    candidates.shuffle(&mut rand::thread_rng());

    for sheet_id in candidates {
        let reservation = Reservation::new(event_id.to_string(), sheet_id, user_id.to_string());
        if db.try_create_reservation(&reservation).await? {
            // Candidate ids come from the rank's range, so this resolves.
            let sheet = Sheet::from_id(sheet_id)
                .ok_or_else(|| ApiError::Internal("sheet id out of range".to_string()))?;
            return Ok(ReserveResponse {
                id: reservation.id,
                sheet_rank: sheet.rank,
                sheet_num: sheet.num,
            });
        }
    }

    Err(ApiError::Conflict("sold_out".to_string()))
}

/// Cancel the active reservation on one seat. Only the owner may cancel.
pub async fn cancel(
    db: &Database,
    event_id: &str,
    user_id: &str,
    rank: &str,
    num: &str,
) -> ApiResult<()> {
    let event = db
        .get_event_by_id(event_id)
        .await?
        .filter(|e| e.public)
        .ok_or_else(|| ApiError::NotFound("invalid_event".to_string()))?;

    let rank =
        SheetRank::from_str(rank).map_err(|_| ApiError::BadRequest("invalid_rank".to_string()))?;

    let num: i64 = num
        .parse()
        .map_err(|_| ApiError::NotFound("invalid_sheet".to_string()))?;
    let sheet = Sheet::from_rank_num(rank, num)
        .ok_or_else(|| ApiError::NotFound("invalid_sheet".to_string()))?;

    let reservation = db
        .get_active_reservation(&event.id, sheet.id)
        .await?
        .ok_or_else(|| ApiError::BadRequest("not_reserved".to_string()))?;

    if reservation.user_id != user_id {
        return Err(ApiError::Forbidden("not_permitted".to_string()));
    }

    db.cancel_reservation(&reservation.id).await
}
