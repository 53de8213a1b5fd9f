//! Error types for the Medilink server.
//!
//! Each domain has its own `thiserror` enum with an `IntoResponse`
//! implementation; this module aggregates them into a single `Error` used
//! across controllers and services. All failures are mapped to exactly one
//! HTTP response at the request boundary, with no partial-success bodies.

pub mod auth;
pub mod config;
pub mod domain;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{
        auth::AuthError, config::ConfigError, domain::DomainError, validation::ValidationFailure,
    },
    model::api::ErrorDto,
};

/// Main error type for the Medilink server.
///
/// Aggregates domain-specific error types and external library errors via
/// `#[from]` so the `?` operator converts them automatically. The
/// `IntoResponse` implementation maps each variant to its HTTP response:
/// validation failures become 400, missing entities 404, state conflicts
/// 409, authentication failures 401, and everything else a logged 500 with
/// a generic message. There is no retry anywhere; transient database errors
/// surface immediately.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or session-gate error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Domain invariant error (entity not found, state conflict).
    #[error(transparent)]
    DomainError(#[from] DomainError),
    /// Request body failed field-level validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationFailure),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug or corrupt seed data.
    ///
    /// Should never occur in normal operation; the missing shipment-state
    /// catalog entry is the canonical producer.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Password hashing or verification error.
    #[error(transparent)]
    HashError(#[from] bcrypt::BcryptError),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::DomainError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error server-side and returns a generic message to the
/// caller so implementation details never leak through the API.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
