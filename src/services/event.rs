use crate::api::middleware::error::{ApiError, ApiResult};
use crate::database::Database;
use crate::models::{CreateEventRequest, EditEventRequest, Event, EventResponse};
use crate::services::availability;

pub async fn create_event(db: &Database, request: CreateEventRequest) -> ApiResult<EventResponse> {
    if request.title.is_empty() || request.price < 0 {
        return Err(ApiError::BadRequest("invalid_parameters".to_string()));
    }

    let event = Event::new(request.title, request.public, request.price);
    db.create_event(&event).await?;

    availability::get_event(db, &event.id, None).await
}

/// Edit visibility flags. A closed event is archived and cannot be edited
/// again; closing an event removes it from the public listing.
pub async fn edit_event(
    db: &Database,
    event_id: &str,
    request: EditEventRequest,
) -> ApiResult<EventResponse> {
    let event = db
        .get_event_by_id(event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("not_found".to_string()))?;

    if event.closed {
        return Err(ApiError::BadRequest("cannot_edit_closed_event".to_string()));
    }

    if request.public && request.closed {
        return Err(ApiError::BadRequest("invalid_parameters".to_string()));
    }

    let public = request.public && !request.closed;
    db.update_event_flags(event_id, public, request.closed).await?;

    availability::get_event(db, event_id, None).await
}
