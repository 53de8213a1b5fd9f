use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::session::require_user,
    error::Error,
    model::{api::ErrorDto, app::AppState, notification::NotificationDto},
    service::notification::NotificationService,
};

pub static NOTIFICATION_TAG: &str = "notificaciones";

/// Lists the logged-in user's notifications, newest first
///
/// # Responses
/// - 200 (OK): Body contains the user's notifications
/// - 401 (Unauthorized): No user logged in
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/notificaciones",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "User notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user(&session).await?;

    let notifications = NotificationService::new(&state.db)
        .list_for_user(user_id)
        .await?;

    Ok((StatusCode::OK, Json(notifications)))
}

/// Marks a notification as read
///
/// Marking an already-read notification succeeds and leaves it read.
///
/// # Responses
/// - 200 (OK): Body contains the updated notification
/// - 401 (Unauthorized): No user logged in
/// - 404 (Not Found): Notification does not exist
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    patch,
    path = "/api/notificaciones/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification id")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;

    let notification = NotificationService::new(&state.db).mark_read(id).await?;

    Ok((StatusCode::OK, Json(notification)))
}

/// Deletes a notification
///
/// # Responses
/// - 204 (No Content): Notification deleted
/// - 401 (Unauthorized): No user logged in
/// - 404 (Not Found): Notification does not exist
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    delete,
    path = "/api/notificaciones/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification id")
    ),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_user(&session).await?;

    NotificationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
