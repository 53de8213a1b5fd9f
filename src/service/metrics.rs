//! Dashboard metric aggregation.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        metrics::MetricsRepository,
        shipment_state::{
            ShipmentStateRepository, STATE_DELIVERED, STATE_IN_TRANSIT, STATE_PACKING,
        },
    },
    error::Error,
    model::metrics::{DashboardMetricsDto, MetricsSummaryDto, ShipmentComparisonDto},
    util::time::{bucket_by_month, trailing_window_start},
};

/// Computes dashboard counters and monthly series from live data.
///
/// Nothing is cached: every call re-runs the counts and the windowed
/// queries, so cost is linear in total row count within the window.
pub struct MetricsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MetricsService<'a> {
    /// Creates a new instance of [`MetricsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the full dashboard snapshot for the trailing 12-month
    /// window ending at `now`.
    pub async fn dashboard_metrics(&self, now: DateTime<Utc>) -> Result<DashboardMetricsDto, Error> {
        let repository = MetricsRepository::new(self.db);

        let usuarios = repository.count_users().await?;
        let hospitales = repository.count_hospitals().await?;
        let donaciones = repository.count_donations().await?;
        let publicaciones = repository.count_publications().await?;
        let medicamentos = repository.count_medications().await?;
        let solicitudes = repository.count_requests().await?;

        let monto_donado: f64 = repository.completed_payment_amounts().await?.iter().sum();

        // Heuristic, not inventory: ignores publication state entirely.
        let publicaciones_disponibles = publicaciones as i64 - solicitudes as i64;

        let window_start = trailing_window_start(now)?;

        let state_ids = self.lifecycle_state_ids().await?;
        let [packing_id, in_transit_id, delivered_id] = state_ids;

        let publication_dates = repository.publication_dates_since(window_start).await?;
        let delivered_dates = repository
            .shipment_dates_since(window_start, &[delivered_id])
            .await?;
        let received_dates = repository
            .shipment_dates_since(window_start, &[packing_id, in_transit_id, delivered_id])
            .await?;

        Ok(DashboardMetricsDto {
            metricas: MetricsSummaryDto {
                usuarios,
                hospitales,
                donaciones,
                publicaciones,
                medicamentos,
                solicitudes,
                monto_donado,
                publicaciones_disponibles,
            },
            publicaciones_por_mes: bucket_by_month(&publication_dates),
            comparacion: ShipmentComparisonDto {
                envios_entregados: bucket_by_month(&delivered_dates),
                envios_recibidos: bucket_by_month(&received_dates),
            },
        })
    }

    /// Resolves the three lifecycle state ids, packing first.
    async fn lifecycle_state_ids(&self) -> Result<[i32; 3], Error> {
        let repository = ShipmentStateRepository::new(self.db);

        let mut ids = [0i32; 3];
        for (slot, name) in ids
            .iter_mut()
            .zip([STATE_PACKING, STATE_IN_TRANSIT, STATE_DELIVERED])
        {
            *slot = repository
                .get_by_name(name)
                .await?
                .ok_or_else(|| {
                    Error::InternalError(format!(
                        "Shipment state catalog entry {:?} is missing; seed data is corrupt",
                        name
                    ))
                })?
                .id;
        }

        Ok(ids)
    }
}
