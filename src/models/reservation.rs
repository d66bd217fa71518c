use crate::models::sheet::SheetRank;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub event_id: String,
    pub sheet_id: i64,
    pub user_id: String,
    pub reserved_at: String,
    pub canceled_at: Option<String>,
}

impl Reservation {
    pub fn new(event_id: String, sheet_id: i64, user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            sheet_id,
            user_id,
            reserved_at: crate::models::user::now_rfc3339(),
            canceled_at: None,
        }
    }

    /// Reservation time as unix seconds, as reported in seat detail JSON.
    pub fn reserved_at_unix(&self) -> Option<i64> {
        time::OffsetDateTime::parse(
            &self.reserved_at,
            &time::format_description::well_known::Rfc3339,
        )
        .ok()
        .map(|t| t.unix_timestamp())
    }
}

// DTOs for API requests/responses
#[derive(Debug, Deserialize)]
pub struct ReserveRequest {
    pub sheet_rank: String,
}

#[derive(Debug, Serialize)]
pub struct ReserveResponse {
    pub id: String,
    pub sheet_rank: SheetRank,
    pub sheet_num: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reservation_is_active() {
        let r = Reservation::new("e1".to_string(), 42, "u1".to_string());
        assert!(r.canceled_at.is_none());
        assert_eq!(r.sheet_id, 42);
    }

    #[test]
    fn test_reserved_at_unix_parses() {
        let r = Reservation::new("e1".to_string(), 1, "u1".to_string());
        assert!(r.reserved_at_unix().is_some());
    }

    #[test]
    fn test_reserved_at_unix_rejects_garbage() {
        let mut r = Reservation::new("e1".to_string(), 1, "u1".to_string());
        r.reserved_at = "yesterday".to_string();
        assert!(r.reserved_at_unix().is_none());
    }
}
