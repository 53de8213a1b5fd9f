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
        logistics::{HandlerDto, HandlerInputDto},
    },
    service::logistics::LogisticsService,
};

pub static LOGISTICS_TAG: &str = "encargados-logistica";

/// Registers a new logistics handler
///
/// # Responses
/// - 201 (Created): Body contains the new handler
/// - 400 (Bad Request): Request body failed validation
/// - 401 (Unauthorized): No user logged in
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/encargado-logistica",
    tag = LOGISTICS_TAG,
    request_body = HandlerInputDto,
    responses(
        (status = 201, description = "Handler created", body = HandlerDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_handler(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<HandlerInputDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;
    body.validate().map_err(ValidationFailure::from)?;

    let handler = LogisticsService::new(&state.db).create_handler(body).await?;

    Ok((StatusCode::CREATED, Json(handler)))
}

/// Lists all logistics handlers
///
/// # Responses
/// - 200 (OK): Body contains every handler
/// - 401 (Unauthorized): No user logged in
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/encargado-logistica",
    tag = LOGISTICS_TAG,
    responses(
        (status = 200, description = "All handlers", body = Vec<HandlerDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_handlers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;

    let handlers = LogisticsService::new(&state.db).list_handlers().await?;

    Ok((StatusCode::OK, Json(handlers)))
}

/// Replaces a logistics handler's contact details
///
/// # Responses
/// - 200 (OK): Body contains the updated handler
/// - 400 (Bad Request): Request body failed validation
/// - 401 (Unauthorized): No user logged in
/// - 404 (Not Found): Handler does not exist
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    put,
    path = "/api/encargado-logistica/{id}",
    tag = LOGISTICS_TAG,
    params(
        ("id" = i32, Path, description = "Handler id")
    ),
    request_body = HandlerInputDto,
    responses(
        (status = 200, description = "Handler updated", body = HandlerDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Handler not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_handler(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<HandlerInputDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;
    body.validate().map_err(ValidationFailure::from)?;

    let handler = LogisticsService::new(&state.db)
        .update_handler(id, body)
        .await?;

    Ok((StatusCode::OK, Json(handler)))
}

/// Deletes a logistics handler
///
/// Deletion is refused while any shipment still references the handler;
/// reassign or finish those shipments first.
///
/// # Responses
/// - 204 (No Content): Handler deleted
/// - 401 (Unauthorized): No user logged in
/// - 404 (Not Found): Handler does not exist
/// - 409 (Conflict): Handler still referenced by shipments
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    delete,
    path = "/api/encargado-logistica/{id}",
    tag = LOGISTICS_TAG,
    params(
        ("id" = i32, Path, description = "Handler id")
    ),
    responses(
        (status = 204, description = "Handler deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Handler not found", body = ErrorDto),
        (status = 409, description = "Handler still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;

    LogisticsService::new(&state.db).delete_handler(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
