mod helpers;

use helpers::*;
use boxoffice::api::middleware::ApiError;
use boxoffice::models::{Sheet, SheetRank};
use boxoffice::services::{availability, reservation};

#[tokio::test]
async fn test_reserve_returns_seat_of_requested_rank() {
    let db = setup_test_db().await;
    let event = create_test_event(&db, "concert", true, 0).await;
    let user = create_test_user(&db, "alice", "alice01").await;

    let response = reservation::reserve(&db, &event.id, &user.id, "A")
        .await
        .unwrap();

    assert_eq!(response.sheet_rank, SheetRank::A);
    assert!(response.sheet_num >= 1 && response.sheet_num <= 150);

    let view = availability::get_event(&db, &event.id, Some(&user.id))
        .await
        .unwrap();
    assert_eq!(view.sheets[&SheetRank::A].remains, 149);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_reserve_invalid_rank_rejected() {
    let db = setup_test_db().await;
    let event = create_test_event(&db, "concert", true, 0).await;
    let user = create_test_user(&db, "alice", "alice01").await;

    let result = reservation::reserve(&db, &event.id, &user.id, "D").await;
    assert!(matches!(result, Err(ApiError::BadRequest(code)) if code == "invalid_rank"));

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_reserve_on_private_event_rejected() {
    let db = setup_test_db().await;
    let event = create_test_event(&db, "secret", false, 0).await;
    let user = create_test_user(&db, "alice", "alice01").await;

    let result = reservation::reserve(&db, &event.id, &user.id, "S").await;
    assert!(matches!(result, Err(ApiError::NotFound(code)) if code == "invalid_event"));

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_rank_sells_out() {
    let db = setup_test_db().await;
    let event = create_test_event(&db, "concert", true, 0).await;
    let user = create_test_user(&db, "alice", "alice01").await;

    // Take all 50 S seats
    for _ in 0..50 {
        reservation::reserve(&db, &event.id, &user.id, "S")
            .await
            .unwrap();
    }

    let result = reservation::reserve(&db, &event.id, &user.id, "S").await;
    assert!(matches!(result, Err(ApiError::Conflict(code)) if code == "sold_out"));

    // Other ranks unaffected
    let view = availability::get_event(&db, &event.id, None).await.unwrap();
    assert_eq!(view.sheets[&SheetRank::S].remains, 0);
    assert_eq!(view.sheets[&SheetRank::A].remains, 150);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_cancel_own_reservation() {
    let db = setup_test_db().await;
    let event = create_test_event(&db, "concert", true, 0).await;
    let user = create_test_user(&db, "alice", "alice01").await;

    let reserved = reservation::reserve(&db, &event.id, &user.id, "B")
        .await
        .unwrap();

    reservation::cancel(
        &db,
        &event.id,
        &user.id,
        "B",
        &reserved.sheet_num.to_string(),
    )
    .await
    .unwrap();

    let view = availability::get_event(&db, &event.id, None).await.unwrap();
    assert_eq!(view.sheets[&SheetRank::B].remains, 300);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_cancel_requires_ownership() {
    let db = setup_test_db().await;
    let event = create_test_event(&db, "concert", true, 0).await;
    let owner = create_test_user(&db, "alice", "alice01").await;
    let other = create_test_user(&db, "bob", "bob01").await;

    let reserved = reservation::reserve(&db, &event.id, &owner.id, "C")
        .await
        .unwrap();

    let result = reservation::cancel(
        &db,
        &event.id,
        &other.id,
        "C",
        &reserved.sheet_num.to_string(),
    )
    .await;
    assert!(matches!(result, Err(ApiError::Forbidden(code)) if code == "not_permitted"));

    // Still reserved
    let view = availability::get_event(&db, &event.id, None).await.unwrap();
    assert_eq!(view.sheets[&SheetRank::C].remains, 499);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_cancel_unreserved_seat_rejected() {
    let db = setup_test_db().await;
    let event = create_test_event(&db, "concert", true, 0).await;
    let user = create_test_user(&db, "alice", "alice01").await;

    let result = reservation::cancel(&db, &event.id, &user.id, "S", "1").await;
    assert!(matches!(result, Err(ApiError::BadRequest(code)) if code == "not_reserved"));

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_cancel_out_of_range_seat_rejected() {
    let db = setup_test_db().await;
    let event = create_test_event(&db, "concert", true, 0).await;
    let user = create_test_user(&db, "alice", "alice01").await;

    let result = reservation::cancel(&db, &event.id, &user.id, "S", "51").await;
    assert!(matches!(result, Err(ApiError::NotFound(code)) if code == "invalid_sheet"));

    let result = reservation::cancel(&db, &event.id, &user.id, "S", "zero").await;
    assert!(matches!(result, Err(ApiError::NotFound(code)) if code == "invalid_sheet"));

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_seat_can_be_rereserved_after_cancel() {
    let db = setup_test_db().await;
    let event = create_test_event(&db, "concert", true, 0).await;
    let alice = create_test_user(&db, "alice", "alice01").await;
    let bob = create_test_user(&db, "bob", "bob01").await;

    // Alice takes every S seat, then frees S-1.
    for _ in 0..50 {
        reservation::reserve(&db, &event.id, &alice.id, "S")
            .await
            .unwrap();
    }
    reservation::cancel(&db, &event.id, &alice.id, "S", "1")
        .await
        .unwrap();

    // The only free S seat left is S-1, so Bob must land there.
    let reserved = reservation::reserve(&db, &event.id, &bob.id, "S")
        .await
        .unwrap();
    assert_eq!(reserved.sheet_num, 1);

    let sheet = Sheet::from_rank_num(SheetRank::S, 1).unwrap();
    let active = db
        .get_active_reservation(&event.id, sheet.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(active.user_id, bob.id);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_duplicate_reservation_on_same_seat_rejected() {
    let db = setup_test_db().await;
    let event = create_test_event(&db, "concert", true, 0).await;
    let user = create_test_user(&db, "alice", "alice01").await;

    let first = boxoffice::models::Reservation::new(event.id.clone(), 10, user.id.clone());
    let second = boxoffice::models::Reservation::new(event.id.clone(), 10, user.id.clone());

    assert!(db.try_create_reservation(&first).await.unwrap());
    assert!(!db.try_create_reservation(&second).await.unwrap());

    teardown_test_db(db).await;
}
