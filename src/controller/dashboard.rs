use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    controller::util::session::require_user,
    error::Error,
    model::{api::ErrorDto, app::AppState, metrics::DashboardMetricsDto},
    service::metrics::MetricsService,
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Returns the dashboard metrics snapshot
///
/// Aggregates entity counts, the total donated amount, and per-month
/// series over the trailing twelve months.
///
/// # Responses
/// - 200 (OK): Body contains the metrics snapshot
/// - 401 (Unauthorized): No user logged in
/// - 500 (Internal Server Error): Database error or missing state catalog
#[utoipa::path(
    get,
    path = "/api/dashboard/metricas",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard metrics", body = DashboardMetricsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_metrics(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;

    let metrics = MetricsService::new(&state.db)
        .dashboard_metrics(Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(metrics)))
}
