//! Tests for dashboard metric aggregation.

use axum::{extract::State, Json};
use chrono::{Datelike, Duration, Utc};
use medilink::{
    controller::shipment::create_shipment,
    model::{app::AppState, session::user::SessionUserId, shipment::CreateShipmentDto},
    service::metrics::MetricsService,
};
use medilink_test_utils::prelude::*;

async fn metrics_setup() -> Result<TestSetup, TestError> {
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

fn current_month_key() -> String {
    let today = Utc::now().date_naive();
    format!("{:04}-{:02}", today.year(), today.month())
}

#[tokio::test]
/// Expect all counters at zero and empty series on an empty database
async fn empty_database_yields_zeroed_snapshot() -> Result<(), TestError> {
    let test = metrics_setup().await?;
    test.seed_shipment_states().await?;

    let snapshot = MetricsService::new(&test.db)
        .dashboard_metrics(Utc::now())
        .await
        .unwrap();

    assert_eq!(snapshot.metricas.usuarios, 0);
    assert_eq!(snapshot.metricas.hospitales, 0);
    assert_eq!(snapshot.metricas.donaciones, 0);
    assert_eq!(snapshot.metricas.monto_donado, 0.0);
    assert_eq!(snapshot.metricas.publicaciones_disponibles, 0);
    assert!(snapshot.publicaciones_por_mes.is_empty());
    assert!(snapshot.comparacion.envios_entregados.is_empty());
    assert!(snapshot.comparacion.envios_recibidos.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect counters, the completed-payment sum, and monthly buckets to
/// reflect a populated database
async fn populated_database_aggregates_correctly() -> Result<(), TestError> {
    let test = metrics_setup().await?;
    let states = test.seed_shipment_states().await?;
    let hospital = test.insert_hospital().await?;
    test.insert_user("ana@example.org").await?;
    let medication = test.insert_medication().await?;

    test.insert_donation(hospital.id).await?;
    test.insert_donation(hospital.id).await?;

    let publication_a = test.insert_publication(hospital.id, medication.id).await?;
    test.insert_publication(hospital.id, medication.id).await?;
    test.insert_request(publication_a.id, hospital.id).await?;

    // Only completed payments count toward the donated amount
    test.insert_payment(hospital.id, 100.0, "Completado").await?;
    test.insert_payment(hospital.id, 50.5, "Completado").await?;
    test.insert_payment(hospital.id, 999.0, "Pendiente").await?;

    // One delivered shipment, one still packing
    test.insert_shipment(states[2].id, None).await?;
    test.insert_shipment(states[0].id, None).await?;

    let snapshot = MetricsService::new(&test.db)
        .dashboard_metrics(Utc::now())
        .await
        .unwrap();

    assert_eq!(snapshot.metricas.usuarios, 1);
    assert_eq!(snapshot.metricas.hospitales, 1);
    assert_eq!(snapshot.metricas.donaciones, 2);
    assert_eq!(snapshot.metricas.publicaciones, 2);
    assert_eq!(snapshot.metricas.medicamentos, 1);
    assert_eq!(snapshot.metricas.solicitudes, 1);
    assert_eq!(snapshot.metricas.monto_donado, 150.5);
    assert_eq!(snapshot.metricas.publicaciones_disponibles, 1);

    // Everything was created just now, so each series is a single
    // current-month bucket
    let month = current_month_key();

    assert_eq!(snapshot.publicaciones_por_mes.len(), 1);
    assert_eq!(snapshot.publicaciones_por_mes[0].mes, month);
    assert_eq!(snapshot.publicaciones_por_mes[0].total, 2);

    assert_eq!(snapshot.comparacion.envios_entregados.len(), 1);
    assert_eq!(snapshot.comparacion.envios_entregados[0].mes, month);
    assert_eq!(snapshot.comparacion.envios_entregados[0].total, 1);

    assert_eq!(snapshot.comparacion.envios_recibidos.len(), 1);
    assert_eq!(snapshot.comparacion.envios_recibidos[0].mes, month);
    assert_eq!(snapshot.comparacion.envios_recibidos[0].total, 2);

    Ok(())
}

#[tokio::test]
/// Expect a shipment created through the endpoint to land in the
/// received series but not the delivered one
async fn freshly_created_shipment_counts_as_received_only() -> Result<(), TestError> {
    let test = metrics_setup().await?;
    test.seed_shipment_states().await?;
    let hospital = test.insert_hospital().await?;
    let method = test.insert_transport_method().await?;
    let donation = test.insert_donation(hospital.id).await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let today = Utc::now().date_naive();
    let result = create_shipment(
        State(AppState::from(test.db.clone())),
        test.session.clone(),
        Json(CreateShipmentDto {
            donacion_id: donation.id,
            transporte_id: method.id,
            fecha_recoleccion: today,
            fecha_entrega_estimada: today + Duration::days(4),
            descripcion: None,
            encargado_logistica_id: None,
        }),
    )
    .await;
    assert!(result.is_ok());

    let snapshot = MetricsService::new(&test.db)
        .dashboard_metrics(Utc::now())
        .await
        .unwrap();

    // Still in the packing state, so it is received but not delivered
    assert_eq!(snapshot.comparacion.envios_recibidos.len(), 1);
    assert_eq!(snapshot.comparacion.envios_recibidos[0].mes, current_month_key());
    assert_eq!(snapshot.comparacion.envios_recibidos[0].total, 1);
    assert!(snapshot.comparacion.envios_entregados.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect publications minus requests to go negative rather than saturate
async fn available_publications_can_go_negative() -> Result<(), TestError> {
    let test = metrics_setup().await?;
    test.seed_shipment_states().await?;
    let hospital = test.insert_hospital().await?;
    let medication = test.insert_medication().await?;

    let publication = test.insert_publication(hospital.id, medication.id).await?;
    test.insert_request(publication.id, hospital.id).await?;
    test.insert_request(publication.id, hospital.id).await?;

    let snapshot = MetricsService::new(&test.db)
        .dashboard_metrics(Utc::now())
        .await
        .unwrap();

    assert_eq!(snapshot.metricas.publicaciones_disponibles, -1);

    Ok(())
}
