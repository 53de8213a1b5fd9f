use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    controller::util::session::require_user,
    data::hospital::HospitalRepository,
    error::{validation::ValidationFailure, Error},
    model::{
        api::{ErrorDto, ValidationErrorDto},
        app::AppState,
        hospital::{CreateHospitalDto, HospitalDto},
    },
};

pub static HOSPITAL_TAG: &str = "hospitales";

/// Lists all registered hospitals
///
/// Public so the registration form can offer hospital affiliations.
///
/// # Responses
/// - 200 (OK): Body contains every hospital, ordered by name
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/hospitales",
    tag = HOSPITAL_TAG,
    responses(
        (status = 200, description = "All hospitals", body = Vec<HospitalDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_hospitals(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let hospitals = HospitalRepository::new(&state.db).list().await?;

    let dtos: Vec<HospitalDto> = hospitals.into_iter().map(HospitalDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Registers a new hospital
///
/// # Responses
/// - 201 (Created): Body contains the new hospital
/// - 400 (Bad Request): Request body failed validation
/// - 401 (Unauthorized): No user logged in
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/hospitales",
    tag = HOSPITAL_TAG,
    request_body = CreateHospitalDto,
    responses(
        (status = 201, description = "Hospital created", body = HospitalDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hospital(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateHospitalDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;
    body.validate().map_err(ValidationFailure::from)?;

    let hospital = HospitalRepository::new(&state.db).create(body).await?;

    Ok((StatusCode::CREATED, Json(HospitalDto::from(hospital))))
}
