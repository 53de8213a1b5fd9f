use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    controller::util::session::require_user,
    error::{validation::ValidationFailure, Error},
    model::{
        api::{ErrorDto, ValidationErrorDto},
        app::AppState,
        shipment::{CreateShipmentDto, ShipmentDto},
    },
    service::shipment::ShipmentService,
};

pub static SHIPMENT_TAG: &str = "envios";

/// Creates a shipment for a donation
///
/// Inserts the shipment in its initial packing state and links the
/// donation to it in the same transaction. A donation can carry at most
/// one shipment.
///
/// # Responses
/// - 201 (Created): Body contains the new shipment
/// - 400 (Bad Request): Request body failed validation
/// - 401 (Unauthorized): No user logged in
/// - 404 (Not Found): Donation does not exist
/// - 409 (Conflict): Donation already has a shipment assigned
/// - 500 (Internal Server Error): Database error or missing state catalog
#[utoipa::path(
    post,
    path = "/api/donaciones/envio",
    tag = SHIPMENT_TAG,
    request_body = CreateShipmentDto,
    responses(
        (status = 201, description = "Shipment created", body = ShipmentDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Donation not found", body = ErrorDto),
        (status = 409, description = "Donation already shipped", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shipment(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateShipmentDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;
    body.validate().map_err(ValidationFailure::from)?;

    let shipment = ShipmentService::new(&state.db).create_shipment(body).await?;

    Ok((StatusCode::CREATED, Json(shipment)))
}

/// Returns a shipment by id
///
/// # Responses
/// - 200 (OK): Body contains the shipment
/// - 401 (Unauthorized): No user logged in
/// - 404 (Not Found): Shipment does not exist
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/envios/{id}",
    tag = SHIPMENT_TAG,
    params(
        ("id" = i32, Path, description = "Shipment id")
    ),
    responses(
        (status = 200, description = "Shipment found", body = ShipmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Shipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shipment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;

    let shipment = ShipmentService::new(&state.db).get_shipment(id).await?;

    Ok((StatusCode::OK, Json(shipment)))
}
