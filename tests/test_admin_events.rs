mod helpers;

use helpers::*;
use boxoffice::api::middleware::ApiError;
use boxoffice::models::{CreateEventRequest, EditEventRequest};
use boxoffice::services::{availability, event};

#[tokio::test]
async fn test_create_event_starts_fully_available() {
    let db = setup_test_db().await;

    let response = event::create_event(
        &db,
        CreateEventRequest {
            title: "launch party".to_string(),
            public: false,
            price: 500,
        },
    )
    .await
    .unwrap();

    assert_eq!(response.title, "launch party");
    assert_eq!(response.public, Some(false));
    assert_eq!(response.closed, Some(false));
    assert_eq!(response.price, Some(500));
    assert_eq!(response.remains, 1000);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_create_event_validates_input() {
    let db = setup_test_db().await;

    let result = event::create_event(
        &db,
        CreateEventRequest {
            title: String::new(),
            public: true,
            price: 100,
        },
    )
    .await;
    assert!(matches!(result, Err(ApiError::BadRequest(_))));

    let result = event::create_event(
        &db,
        CreateEventRequest {
            title: "free for all".to_string(),
            public: true,
            price: -1,
        },
    )
    .await;
    assert!(matches!(result, Err(ApiError::BadRequest(_))));

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_publish_and_close_event() {
    let db = setup_test_db().await;
    let created = create_test_event(&db, "concert", false, 100).await;

    // Publish
    let response = event::edit_event(
        &db,
        &created.id,
        EditEventRequest {
            public: true,
            closed: false,
        },
    )
    .await
    .unwrap();
    assert_eq!(response.public, Some(true));

    // Close: leaves the public listing
    let response = event::edit_event(
        &db,
        &created.id,
        EditEventRequest {
            public: false,
            closed: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(response.closed, Some(true));
    assert_eq!(response.public, Some(false));

    let public = availability::get_events(&db, false).await.unwrap();
    assert!(public.is_empty());

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_closed_event_cannot_be_edited() {
    let db = setup_test_db().await;
    let created = create_test_event(&db, "concert", true, 100).await;

    event::edit_event(
        &db,
        &created.id,
        EditEventRequest {
            public: false,
            closed: true,
        },
    )
    .await
    .unwrap();

    let result = event::edit_event(
        &db,
        &created.id,
        EditEventRequest {
            public: true,
            closed: false,
        },
    )
    .await;
    assert!(matches!(result, Err(ApiError::BadRequest(code)) if code == "cannot_edit_closed_event"));

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_public_and_closed_is_contradictory() {
    let db = setup_test_db().await;
    let created = create_test_event(&db, "concert", true, 100).await;

    let result = event::edit_event(
        &db,
        &created.id,
        EditEventRequest {
            public: true,
            closed: true,
        },
    )
    .await;
    assert!(matches!(result, Err(ApiError::BadRequest(code)) if code == "invalid_parameters"));

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_edit_unknown_event_not_found() {
    let db = setup_test_db().await;

    let result = event::edit_event(
        &db,
        "no-such-event",
        EditEventRequest {
            public: true,
            closed: false,
        },
    )
    .await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));

    teardown_test_db(db).await;
}
