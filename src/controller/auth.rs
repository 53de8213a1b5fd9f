use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    controller::util::session::require_user,
    error::{validation::ValidationFailure, Error},
    model::{
        api::{ErrorDto, ValidationErrorDto},
        app::AppState,
        auth::{LoginDto, RegisterDto, UserDto},
        session::user::SessionUserId,
    },
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Registers a new account
///
/// # Responses
/// - 201 (Created): Account created, body contains the new user
/// - 400 (Bad Request): Request body failed validation
/// - 409 (Conflict): Email already registered
/// - 500 (Internal Server Error): Database or password hashing error
#[utoipa::path(
    post,
    path = "/api/auth/registro",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate().map_err(ValidationFailure::from)?;

    let user = AuthService::new(&state.db).register(body).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Logs in with email and password
///
/// On success the user's id is stored in the server-side session; the
/// session cookie is the only credential the client holds afterwards.
///
/// # Responses
/// - 200 (OK): Logged in, body contains the user
/// - 400 (Bad Request): Request body failed validation
/// - 401 (Unauthorized): Unknown email or wrong password
/// - 500 (Internal Server Error): Database, hashing or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate().map_err(ValidationFailure::from)?;

    let user = AuthService::new(&state.db).login(body).await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Logs the current user out by clearing their session
///
/// # Responses
/// - 204 (No Content): Logged out, or no session existed to begin with
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Clearing a session that was never written errors out; skip it.
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the currently logged-in user
///
/// # Responses
/// - 200 (OK): Body contains the user
/// - 401 (Unauthorized): No user logged in
/// - 404 (Not Found): Session points at a user no longer in the database
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/api/auth/usuario",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user(&session).await?;

    let user = AuthService::new(&state.db).get_user(user_id).await;

    // The session outlived the account; clear it so the client relogs.
    if let Err(Error::AuthError(crate::error::auth::AuthError::UserNotInDatabase(_))) = &user {
        session.clear().await;
    }

    Ok((StatusCode::OK, Json(user?)))
}
