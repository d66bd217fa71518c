use crate::models::sheet::SheetRank;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub public: bool,
    pub closed: bool,
    pub price: i64,
    pub created_at: String,
}

impl Event {
    pub fn new(title: String, public: bool, price: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            public,
            closed: false,
            price,
            created_at: crate::models::user::now_rfc3339(),
        }
    }
}

// DTOs for API requests/responses
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub public: bool,
    pub price: i64,
}

#[derive(Debug, Deserialize)]
pub struct EditEventRequest {
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub closed: bool,
}

/// One seat in the per-rank detail listing.
#[derive(Debug, Clone, Serialize)]
pub struct SeatDetail {
    pub num: i64,
    pub reserved: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub mine: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_at: Option<i64>,
}

/// Availability of a single rank within an event.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SheetAvailability {
    pub total: i64,
    pub remains: i64,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<SeatDetail>>,
}

/// Full availability view of an event: overall counts plus a per-rank
/// breakdown. `price`, `public` and `closed` are dropped by
/// [`EventResponse::sanitize`] for non-admin listings.
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    pub total: i64,
    pub remains: i64,
    pub sheets: BTreeMap<SheetRank, SheetAvailability>,
}

impl EventResponse {
    /// Strip the fields a public (non-admin) listing must not expose.
    pub fn sanitize(mut self) -> Self {
        self.public = None;
        self.closed = None;
        self.price = None;
        self
    }

    /// Drop the per-seat detail, keeping only the per-rank counts. Used by
    /// the list view where rendering 1000 seats per event is pure waste.
    pub fn without_details(mut self) -> Self {
        for availability in self.sheets.values_mut() {
            availability.details = None;
        }
        self
    }
}

