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
    data::publication::PublicationRepository,
    error::{domain::DomainError, validation::ValidationFailure, Error},
    model::{
        api::{ErrorDto, ValidationErrorDto},
        app::AppState,
        publication::{CreatePublicationDto, PublicationDto, UpdatePublicationDto},
    },
};

pub static PUBLICATION_TAG: &str = "publicaciones";

/// Lists all medication offers, newest first
///
/// # Responses
/// - 200 (OK): Body contains every publication
/// - 401 (Unauthorized): No user logged in
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/publicaciones",
    tag = PUBLICATION_TAG,
    responses(
        (status = 200, description = "All publications", body = Vec<PublicationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_publications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;

    let publications = PublicationRepository::new(&state.db).list().await?;

    let dtos: Vec<PublicationDto> = publications.into_iter().map(PublicationDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Lists a new medication offer
///
/// # Responses
/// - 201 (Created): Body contains the new publication
/// - 400 (Bad Request): Request body failed validation
/// - 401 (Unauthorized): No user logged in
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/publicaciones",
    tag = PUBLICATION_TAG,
    request_body = CreatePublicationDto,
    responses(
        (status = 201, description = "Publication created", body = PublicationDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_publication(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreatePublicationDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;
    body.validate().map_err(ValidationFailure::from)?;

    let publication = PublicationRepository::new(&state.db).create(body).await?;

    Ok((StatusCode::CREATED, Json(PublicationDto::from(publication))))
}

/// Updates a medication offer
///
/// # Responses
/// - 200 (OK): Body contains the updated publication
/// - 400 (Bad Request): Request body failed validation
/// - 401 (Unauthorized): No user logged in
/// - 404 (Not Found): Publication does not exist
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    put,
    path = "/api/publicaciones/{id}",
    tag = PUBLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Publication id")
    ),
    request_body = UpdatePublicationDto,
    responses(
        (status = 200, description = "Publication updated", body = PublicationDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Publication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_publication(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<UpdatePublicationDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;
    body.validate().map_err(ValidationFailure::from)?;

    let repository = PublicationRepository::new(&state.db);

    let publication = repository
        .get_by_id(id)
        .await?
        .ok_or(DomainError::not_found("Publication", id))?;

    let publication = repository.update(publication, body).await?;

    Ok((StatusCode::OK, Json(PublicationDto::from(publication))))
}
