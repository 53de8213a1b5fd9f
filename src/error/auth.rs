use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Authentication and session-gate errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// A protected route was called without a user id in the session.
    #[error("No user is logged in for this session")]
    Unauthorized,
    /// Login credentials did not match a stored user.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// The session references a user id that no longer exists.
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => {
                tracing::debug!("{}", Self::Unauthorized);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not logged in".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", Self::InvalidCredentials);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid email or password".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::warn!(user_id = %user_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
