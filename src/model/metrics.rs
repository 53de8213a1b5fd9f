use serde::{Deserialize, Serialize};

/// Full dashboard metrics response.
///
/// Recomputed from live data on every request; nothing here is cached or
/// persisted.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DashboardMetricsDto {
    /// Scalar counters
    pub metricas: MetricsSummaryDto,
    /// Publications per month over the trailing 12-month window
    #[serde(rename = "publicacionesPorMes")]
    pub publicaciones_por_mes: Vec<MonthBucketDto>,
    /// Delivered vs received shipment series over the same window
    pub comparacion: ShipmentComparisonDto,
}

/// Scalar dashboard counters.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsSummaryDto {
    /// Total registered users
    pub usuarios: u64,
    /// Total hospitals
    pub hospitales: u64,
    /// Total donations
    pub donaciones: u64,
    /// Total publications
    pub publicaciones: u64,
    /// Total medications in the catalog
    pub medicamentos: u64,
    /// Total medication requests
    pub solicitudes: u64,
    /// Sum of completed payment amounts
    #[serde(rename = "montoDonado")]
    pub monto_donado: f64,
    /// Publications minus requests. A heuristic proxy for available
    /// listings, not a true inventory count: it ignores publication state.
    #[serde(rename = "publicacionesDisponibles")]
    pub publicaciones_disponibles: i64,
}

/// One month of a time series. Months with zero activity are omitted from
/// the sequence; charting consumers zero-fill client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MonthBucketDto {
    /// Bucket key, "YYYY-MM"
    pub mes: String,
    /// Row count for the month
    pub total: i64,
}

/// Delivered vs received shipments, bucketed by month.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShipmentComparisonDto {
    /// Shipments in state "Entregado"
    #[serde(rename = "enviosEntregados")]
    pub envios_entregados: Vec<MonthBucketDto>,
    /// Shipments in any lifecycle state
    #[serde(rename = "enviosRecibidos")]
    pub envios_recibidos: Vec<MonthBucketDto>,
}
