//! Tests for the dashboard metrics endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use medilink::{
    controller::dashboard::get_dashboard_metrics,
    model::{app::AppState, session::user::SessionUserId},
};
use medilink_test_utils::prelude::*;

async fn dashboard_setup() -> Result<TestSetup, TestError> {
    test_setup_with_tables!(
        entity::prelude::Hospital,
        entity::prelude::AppUser,
        entity::prelude::ShipmentState,
        entity::prelude::TransportMethod,
        entity::prelude::LogisticsHandler,
        entity::prelude::Shipment,
        entity::prelude::Donation,
        entity::prelude::Medication,
        entity::prelude::Publication,
        entity::prelude::MedicationRequest,
        entity::prelude::Payment
    )
}

#[tokio::test]
/// Expect 200 with an empty database once the state catalog is seeded
async fn returns_metrics_snapshot() -> Result<(), TestError> {
    let test = dashboard_setup().await?;
    test.seed_shipment_states().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result =
        get_dashboard_metrics(State(AppState::from(test.db.clone())), test.session.clone()).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 without a logged-in user
async fn rejects_anonymous_dashboard() -> Result<(), TestError> {
    let test = dashboard_setup().await?;

    let result =
        get_dashboard_metrics(State(AppState::from(test.db.clone())), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 500 when the state catalog is missing
async fn fails_without_state_catalog() -> Result<(), TestError> {
    let test = dashboard_setup().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result =
        get_dashboard_metrics(State(AppState::from(test.db.clone())), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
