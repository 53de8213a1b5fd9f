//! Tests for the published-notice lifecycle endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{Duration, NaiveDate, Utc};
use medilink::{
    controller::notice::{create_notice, list_published_notices},
    data::notice::NoticeRepository,
    model::{app::AppState, notice::CreateNoticeDto, session::user::SessionUserId},
    service::notice::NoticeService,
};
use medilink_test_utils::prelude::*;

async fn notice_setup() -> Result<TestSetup, TestError> {
    test_setup_with_tables!(entity::prelude::Notice)
}

fn relative_day(days: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(days)
}

#[tokio::test]
/// Expect 201 when publishing a notice
async fn creates_notice() -> Result<(), TestError> {
    let test = notice_setup().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = create_notice(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Json(CreateNoticeDto {
            titulo: "Jornada de donación".to_string(),
            contenido: "Este sábado en el Hospital General".to_string(),
            fecha: relative_day(7),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect the published list to omit expired notices without mutating them
async fn list_is_a_pure_read() -> Result<(), TestError> {
    let test = notice_setup().await?;
    let repository = NoticeRepository::new(&test.db);

    let expired = repository
        .create("Vencido".to_string(), "-".to_string(), relative_day(-10))
        .await?;
    repository
        .create("Activo".to_string(), "-".to_string(), relative_day(10))
        .await?;

    let result = list_published_notices(State(AppState::from(test.db.clone()))).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let active = repository.list_published(Utc::now().date_naive()).await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Activo");

    // The expired notice is filtered out, not unpublished, by the read
    let expired = repository.get_by_id(expired.id).await?.unwrap();
    assert!(expired.published);

    Ok(())
}

#[tokio::test]
/// Expect the sweep to unpublish expired notices, leaving active ones
async fn sweep_unpublishes_expired_notices() -> Result<(), TestError> {
    let test = notice_setup().await?;
    let repository = NoticeRepository::new(&test.db);

    let expired = repository
        .create("Vencido".to_string(), "-".to_string(), relative_day(-10))
        .await?;
    let active = repository
        .create("Activo".to_string(), "-".to_string(), relative_day(10))
        .await?;

    let swept = NoticeService::new(&test.db).sweep_expired(Utc::now()).await;
    assert!(swept.is_ok());
    assert_eq!(swept.unwrap(), 1);

    let expired = repository.get_by_id(expired.id).await?.unwrap();
    let active = repository.get_by_id(active.id).await?.unwrap();
    assert!(!expired.published);
    assert!(active.published);

    Ok(())
}
