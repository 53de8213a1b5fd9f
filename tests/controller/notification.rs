//! Tests for notification endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use medilink::{
    controller::notification::{delete_notification, list_notifications, mark_notification_read},
    data::notification::NotificationRepository,
    model::{app::AppState, session::user::SessionUserId},
};
use medilink_test_utils::prelude::*;

async fn notification_setup() -> Result<TestSetup, TestError> {
    test_setup_with_tables!(
        entity::prelude::Hospital,
        entity::prelude::AppUser,
        entity::prelude::Notification
    )
}

#[tokio::test]
/// Expect only the session user's notifications from the list endpoint
async fn lists_only_own_notifications() -> Result<(), TestError> {
    let test = notification_setup().await?;
    let user_a = test.insert_user("a@example.org").await?;
    let user_b = test.insert_user("b@example.org").await?;
    test.insert_notification(user_a.id).await?;
    test.insert_notification(user_b.id).await?;
    SessionUserId::insert(&test.session, user_a.id).await.unwrap();

    let result = list_notifications(State(AppState::from(test.db.clone())), test.session.clone())
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    // Only one row belongs to user A
    let rows = NotificationRepository::new(&test.db)
        .list_for_user(user_a.id)
        .await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect 200 on mark-read, and 200 again when already read
async fn marks_notification_read_idempotently() -> Result<(), TestError> {
    let test = notification_setup().await?;
    let user = test.insert_user("ana@example.org").await?;
    let notification = test.insert_notification(user.id).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let first = mark_notification_read(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Path(notification.id),
    )
    .await;
    assert!(first.is_ok());
    assert_eq!(first.unwrap().into_response().status(), StatusCode::OK);

    let second = mark_notification_read(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Path(notification.id),
    )
    .await;
    assert!(second.is_ok());
    assert_eq!(second.unwrap().into_response().status(), StatusCode::OK);

    let row = NotificationRepository::new(&test.db)
        .get_by_id(notification.id)
        .await?
        .unwrap();
    assert!(row.read);

    Ok(())
}

#[tokio::test]
/// Expect 404 when marking a notification that does not exist
async fn mark_read_missing_notification() -> Result<(), TestError> {
    let test = notification_setup().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = mark_notification_read(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Path(42),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 204 on delete, then 404 when deleting the same id again
async fn deletes_notification_once() -> Result<(), TestError> {
    let test = notification_setup().await?;
    let user = test.insert_user("ana@example.org").await?;
    let notification = test.insert_notification(user.id).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let first = delete_notification(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Path(notification.id),
    )
    .await;
    assert!(first.is_ok());
    assert_eq!(
        first.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );

    let second = delete_notification(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Path(notification.id),
    )
    .await;

    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
