//! Tests for the donation-shipment workflow endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use medilink::{
    controller::shipment::{create_shipment, get_shipment},
    data::donation::DonationRepository,
    model::{app::AppState, session::user::SessionUserId, shipment::CreateShipmentDto},
};
use medilink_test_utils::prelude::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn body(donacion_id: i32, transporte_id: i32) -> CreateShipmentDto {
    CreateShipmentDto {
        donacion_id,
        transporte_id,
        fecha_recoleccion: day(2026, 8, 1),
        fecha_entrega_estimada: day(2026, 8, 5),
        descripcion: None,
        encargado_logistica_id: None,
    }
}

async fn workflow_setup() -> Result<TestSetup, TestError> {
    test_setup_with_tables!(
        entity::prelude::Hospital,
        entity::prelude::ShipmentState,
        entity::prelude::TransportMethod,
        entity::prelude::LogisticsHandler,
        entity::prelude::Shipment,
        entity::prelude::Donation
    )
}

#[tokio::test]
/// Expect 201 and the donation linked to its new shipment
async fn creates_shipment_and_links_donation() -> Result<(), TestError> {
    let test = workflow_setup().await?;
    let hospital = test.insert_hospital().await?;
    let states = test.seed_shipment_states().await?;
    let method = test.insert_transport_method().await?;
    let donation = test.insert_donation(hospital.id).await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = create_shipment(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Json(body(donation.id, method.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    // The donation now points at a shipment in the packing state
    let donation = DonationRepository::new(&test.db)
        .get_by_id(donation.id)
        .await?
        .unwrap();
    let shipment_id = donation.shipment_id.unwrap();

    let shipment = medilink::data::shipment::ShipmentRepository::new(&test.db)
        .get_by_id(shipment_id)
        .await?
        .unwrap();
    assert_eq!(shipment.shipment_state_id, states[0].id);

    Ok(())
}

#[tokio::test]
/// Expect 409 when the donation already has a shipment assigned
async fn rejects_second_shipment_for_donation() -> Result<(), TestError> {
    let test = workflow_setup().await?;
    let hospital = test.insert_hospital().await?;
    test.seed_shipment_states().await?;
    let method = test.insert_transport_method().await?;
    let donation = test.insert_donation(hospital.id).await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let first = create_shipment(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Json(body(donation.id, method.id)),
    )
    .await;
    assert!(first.is_ok());

    let second = create_shipment(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Json(body(donation.id, method.id)),
    )
    .await;

    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 404 when the donation does not exist
async fn rejects_missing_donation() -> Result<(), TestError> {
    let test = workflow_setup().await?;
    test.seed_shipment_states().await?;
    let method = test.insert_transport_method().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = create_shipment(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Json(body(99, method.id)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 500 when the shipment state catalog was never seeded
async fn fails_on_missing_state_catalog() -> Result<(), TestError> {
    let test = workflow_setup().await?;
    let hospital = test.insert_hospital().await?;
    let method = test.insert_transport_method().await?;
    let donation = test.insert_donation(hospital.id).await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = create_shipment(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Json(body(donation.id, method.id)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The transaction never ran; the donation is still unlinked
    let donation = DonationRepository::new(&test.db)
        .get_by_id(donation.id)
        .await?
        .unwrap();
    assert!(donation.shipment_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 400 when the estimated delivery date precedes pickup
async fn rejects_delivery_before_pickup() -> Result<(), TestError> {
    let test = workflow_setup().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let mut dto = body(1, 1);
    dto.fecha_entrega_estimada = day(2026, 7, 31);

    let result = create_shipment(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Json(dto),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 401 when no user is logged in
async fn rejects_anonymous_create() -> Result<(), TestError> {
    let test = workflow_setup().await?;

    let result = create_shipment(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Json(body(1, 1)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 200 for an existing shipment and 404 for a missing one
async fn gets_shipment_by_id() -> Result<(), TestError> {
    let test = workflow_setup().await?;
    let states = test.seed_shipment_states().await?;
    let shipment = test.insert_shipment(states[0].id, None).await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let found = get_shipment(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Path(shipment.id),
    )
    .await;

    assert!(found.is_ok());
    assert_eq!(found.unwrap().into_response().status(), StatusCode::OK);

    let missing = get_shipment(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Path(shipment.id + 1),
    )
    .await;

    assert!(missing.is_err());
    let resp = missing.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
