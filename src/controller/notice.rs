use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    controller::util::session::require_user,
    error::{validation::ValidationFailure, Error},
    model::{
        api::{ErrorDto, ValidationErrorDto},
        app::AppState,
        notice::{CreateNoticeDto, NoticeDto},
    },
    service::notice::NoticeService,
};

pub static NOTICE_TAG: &str = "avisos";

/// Lists currently active published notices
///
/// Public endpoint. Only notices that are published and whose date has
/// not yet passed are returned; the read never mutates notice state.
///
/// # Responses
/// - 200 (OK): Body contains active notices, newest date first
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/avisos/publicados",
    tag = NOTICE_TAG,
    responses(
        (status = 200, description = "Active published notices", body = Vec<NoticeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_published_notices(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let notices = NoticeService::new(&state.db).list_published(Utc::now()).await?;

    Ok((StatusCode::OK, Json(notices)))
}

/// Publishes a new notice
///
/// # Responses
/// - 201 (Created): Body contains the new notice
/// - 400 (Bad Request): Request body failed validation
/// - 401 (Unauthorized): No user logged in
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/avisos",
    tag = NOTICE_TAG,
    request_body = CreateNoticeDto,
    responses(
        (status = 201, description = "Notice published", body = NoticeDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_notice(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateNoticeDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;
    body.validate().map_err(ValidationFailure::from)?;

    let notice = NoticeService::new(&state.db).create_notice(body).await?;

    Ok((StatusCode::CREATED, Json(notice)))
}
