use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    controller::util::session::require_user,
    data::donation::DonationRepository,
    error::{validation::ValidationFailure, Error},
    model::{
        api::{ErrorDto, ValidationErrorDto},
        app::AppState,
        donation::{CreateDonationDto, DonationDto},
    },
};

pub static DONATION_TAG: &str = "donaciones";

/// Registers a new donation
///
/// The donation starts with no shipment attached; a shipment is created
/// for it later through `POST /api/donaciones/envio`.
///
/// # Responses
/// - 201 (Created): Body contains the new donation
/// - 400 (Bad Request): Request body failed validation
/// - 401 (Unauthorized): No user logged in
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/donaciones",
    tag = DONATION_TAG,
    request_body = CreateDonationDto,
    responses(
        (status = 201, description = "Donation created", body = DonationDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_donation(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateDonationDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;
    body.validate().map_err(ValidationFailure::from)?;

    let donation = DonationRepository::new(&state.db)
        .create(body.hospital_id, body.descripcion)
        .await?;

    Ok((StatusCode::CREATED, Json(DonationDto::from(donation))))
}

/// Lists all donations, newest first
///
/// # Responses
/// - 200 (OK): Body contains every donation
/// - 401 (Unauthorized): No user logged in
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/donaciones",
    tag = DONATION_TAG,
    responses(
        (status = 200, description = "All donations", body = Vec<DonationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_donations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;

    let donations = DonationRepository::new(&state.db).list().await?;

    let dtos: Vec<DonationDto> = donations.into_iter().map(DonationDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
