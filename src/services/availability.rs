use crate::api::middleware::error::{ApiError, ApiResult};
use crate::database::Database;
use crate::models::{
    Event, EventResponse, Reservation, SeatDetail, Sheet, SheetAvailability, SheetRank,
    TOTAL_SHEETS,
};
use std::collections::{BTreeMap, HashMap};

/// Build the full availability view of one event: one query for the active
/// reservations, then a walk over the fixed 1000-seat layout. A seat counts
/// as reserved only while a non-canceled reservation row exists; when
/// duplicates slipped in, the earliest `reserved_at` wins.
pub async fn get_event(
    db: &Database,
    event_id: &str,
    login_user_id: Option<&str>,
) -> ApiResult<EventResponse> {
    let event = db
        .get_event_by_id(event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("not_found".to_string()))?;

    let reservations = db.list_active_reservations(event_id).await?;
    Ok(assemble(&event, &reservations, login_user_id))
}

/// List events in creation order. Non-public events are skipped unless
/// `all` (the admin view). Per-seat detail is omitted in list views.
pub async fn get_events(db: &Database, all: bool) -> ApiResult<Vec<EventResponse>> {
    let events = db.list_events().await?;

    let mut responses = Vec::new();
    for event in events {
        if !all && !event.public {
            continue;
        }
        let reservations = db.list_active_reservations(&event.id).await?;
        responses.push(assemble(&event, &reservations, None).without_details());
    }

    Ok(responses)
}

/// Aggregate reservation rows into per-rank availability for one viewer.
pub fn assemble(
    event: &Event,
    reservations: &[Reservation],
    login_user_id: Option<&str>,
) -> EventResponse {
    // Earliest active reservation per seat.
    let mut by_sheet: HashMap<i64, &Reservation> = HashMap::new();
    for reservation in reservations {
        if reservation.canceled_at.is_some() {
            continue;
        }
        match by_sheet.get(&reservation.sheet_id) {
            Some(existing) if existing.reserved_at <= reservation.reserved_at => {}
            _ => {
                by_sheet.insert(reservation.sheet_id, reservation);
            }
        }
    }

    let mut sheets: BTreeMap<SheetRank, SheetAvailability> = SheetRank::ALL
        .into_iter()
        .map(|rank| {
            (
                rank,
                SheetAvailability {
                    total: rank.capacity(),
                    remains: 0,
                    price: event.price + rank.seat_price(),
                    details: Some(Vec::with_capacity(rank.capacity() as usize)),
                },
            )
        })
        .collect();

    let mut remains = 0;
    for id in 1..=TOTAL_SHEETS {
        // Ids 1..=1000 are all valid by construction.
        let Some(sheet) = Sheet::from_id(id) else {
            continue;
        };

        let detail = match by_sheet.get(&id) {
            Some(reservation) => SeatDetail {
                num: sheet.num,
                reserved: true,
                mine: login_user_id.is_some_and(|uid| uid == reservation.user_id),
                reserved_at: reservation.reserved_at_unix(),
            },
            None => {
                remains += 1;
                SeatDetail {
                    num: sheet.num,
                    reserved: false,
                    mine: false,
                    reserved_at: None,
                }
            }
        };

        if let Some(availability) = sheets.get_mut(&sheet.rank) {
            if !detail.reserved {
                availability.remains += 1;
            }
            if let Some(details) = availability.details.as_mut() {
                details.push(detail);
            }
        }
    }

    EventResponse {
        id: event.id.clone(),
        title: event.title.clone(),
        public: Some(event.public),
        closed: Some(event.closed),
        price: Some(event.price),
        total: TOTAL_SHEETS,
        remains,
        sheets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> Event {
        Event::new("test event".to_string(), true, 1000)
    }

    #[test]
    fn test_empty_event_fully_available() {
        let e = event();
        let response = assemble(&e, &[], None);

        assert_eq!(response.total, 1000);
        assert_eq!(response.remains, 1000);
        assert_eq!(response.sheets[&SheetRank::S].remains, 50);
        assert_eq!(response.sheets[&SheetRank::A].remains, 150);
        assert_eq!(response.sheets[&SheetRank::B].remains, 300);
        assert_eq!(response.sheets[&SheetRank::C].remains, 500);
    }

    #[test]
    fn test_rank_prices_include_event_price() {
        let e = event();
        let response = assemble(&e, &[], None);

        assert_eq!(response.sheets[&SheetRank::S].price, 6000);
        assert_eq!(response.sheets[&SheetRank::A].price, 4000);
        assert_eq!(response.sheets[&SheetRank::B].price, 2000);
        assert_eq!(response.sheets[&SheetRank::C].price, 1000);
    }

    #[test]
    fn test_reservation_decrements_only_its_rank() {
        let e = event();
        // Sheet 51 is A-1
        let reservations = vec![Reservation::new(e.id.clone(), 51, "u1".to_string())];
        let response = assemble(&e, &reservations, None);

        assert_eq!(response.remains, 999);
        assert_eq!(response.sheets[&SheetRank::A].remains, 149);
        assert_eq!(response.sheets[&SheetRank::S].remains, 50);
        assert_eq!(response.sheets[&SheetRank::B].remains, 300);
        assert_eq!(response.sheets[&SheetRank::C].remains, 500);
    }

    #[test]
    fn test_canceled_reservation_ignored() {
        let e = event();
        let mut reservation = Reservation::new(e.id.clone(), 1, "u1".to_string());
        reservation.canceled_at = Some(reservation.reserved_at.clone());
        let response = assemble(&e, &[reservation], None);

        assert_eq!(response.remains, 1000);
        assert_eq!(response.sheets[&SheetRank::S].remains, 50);
    }

    #[test]
    fn test_mine_flag_follows_viewer() {
        let e = event();
        let reservations = vec![Reservation::new(e.id.clone(), 1, "u1".to_string())];

        let mine = assemble(&e, &reservations, Some("u1"));
        let details = mine.sheets[&SheetRank::S].details.as_ref().unwrap();
        assert!(details[0].reserved);
        assert!(details[0].mine);

        let other = assemble(&e, &reservations, Some("u2"));
        let details = other.sheets[&SheetRank::S].details.as_ref().unwrap();
        assert!(details[0].reserved);
        assert!(!details[0].mine);

        let anonymous = assemble(&e, &reservations, None);
        let details = anonymous.sheets[&SheetRank::S].details.as_ref().unwrap();
        assert!(!details[0].mine);
    }

    #[test]
    fn test_earliest_reservation_wins() {
        let e = event();
        let mut first = Reservation::new(e.id.clone(), 1, "early".to_string());
        first.reserved_at = "2026-01-01T00:00:00Z".to_string();
        let mut second = Reservation::new(e.id.clone(), 1, "late".to_string());
        second.reserved_at = "2026-01-02T00:00:00Z".to_string();

        // Insertion order must not matter.
        let response = assemble(&e, &[second, first], Some("early"));
        let details = response.sheets[&SheetRank::S].details.as_ref().unwrap();
        assert!(details[0].mine);
        // One seat taken, not two.
        assert_eq!(response.sheets[&SheetRank::S].remains, 49);
    }

    #[test]
    fn test_sanitize_strips_admin_fields() {
        let e = event();
        let response = assemble(&e, &[], None).sanitize();

        assert!(response.public.is_none());
        assert!(response.closed.is_none());
        assert!(response.price.is_none());
    }

    #[test]
    fn test_without_details_keeps_counts() {
        let e = event();
        let reservations = vec![Reservation::new(e.id.clone(), 501, "u1".to_string())];
        let response = assemble(&e, &reservations, None).without_details();

        assert!(response.sheets[&SheetRank::C].details.is_none());
        assert_eq!(response.sheets[&SheetRank::C].remains, 499);
    }
}
