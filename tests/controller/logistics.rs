//! Tests for logistics handler endpoints, including the deletion guard.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use medilink::{
    controller::logistics::{create_handler, delete_handler, update_handler},
    data::logistics_handler::LogisticsHandlerRepository,
    model::{app::AppState, logistics::HandlerInputDto, session::user::SessionUserId},
};
use medilink_test_utils::prelude::*;

fn input(hospital_id: i32) -> HandlerInputDto {
    HandlerInputDto {
        hospital_id,
        nombre: "Laura Méndez".to_string(),
        telefono: "555-0100".to_string(),
        correo: "laura@example.org".to_string(),
    }
}

async fn logistics_setup() -> Result<TestSetup, TestError> {
    test_setup_with_tables!(
        entity::prelude::Hospital,
        entity::prelude::ShipmentState,
        entity::prelude::TransportMethod,
        entity::prelude::LogisticsHandler,
        entity::prelude::Shipment
    )
}

#[tokio::test]
/// Expect 201 when creating a handler
async fn creates_handler() -> Result<(), TestError> {
    let test = logistics_setup().await?;
    let hospital = test.insert_hospital().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = create_handler(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Json(input(hospital.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 409 and the handler kept while shipments still reference it
async fn refuses_delete_of_referenced_handler() -> Result<(), TestError> {
    let test = logistics_setup().await?;
    let hospital = test.insert_hospital().await?;
    let states = test.seed_shipment_states().await?;
    let handler = test.insert_handler(hospital.id).await?;
    test.insert_shipment(states[0].id, Some(handler.id)).await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = delete_handler(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Path(handler.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // The handler row survived the refused delete
    let kept = LogisticsHandlerRepository::new(&test.db)
        .get_by_id(handler.id)
        .await?;
    assert!(kept.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 204 when deleting an unreferenced handler
async fn deletes_unreferenced_handler() -> Result<(), TestError> {
    let test = logistics_setup().await?;
    let hospital = test.insert_hospital().await?;
    let handler = test.insert_handler(hospital.id).await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = delete_handler(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Path(handler.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let gone = LogisticsHandlerRepository::new(&test.db)
        .get_by_id(handler.id)
        .await?;
    assert!(gone.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 404 when deleting a handler that never existed
async fn delete_missing_handler_not_found() -> Result<(), TestError> {
    let test = logistics_setup().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = delete_handler(
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
/// Expect 404 when updating a handler that never existed
async fn update_missing_handler_not_found() -> Result<(), TestError> {
    let test = logistics_setup().await?;
    let hospital = test.insert_hospital().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = update_handler(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Path(42),
        Json(input(hospital.id)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
