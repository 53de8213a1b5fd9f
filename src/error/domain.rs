use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Domain invariant errors shared by all resource workflows.
///
/// `NotFound` maps to 404 and `Conflict` to 409. Conflicts cover the state
/// invariants of the donation-shipment workflow: attaching a second
/// shipment to a donation, deleting a logistics handler that shipments
/// still reference, and registering a duplicate email.
#[derive(Error, Debug)]
pub enum DomainError {
    /// A referenced entity does not exist.
    #[error("{resource} with ID {id} not found")]
    NotFound {
        /// Human-readable resource name, e.g. "Donation".
        resource: &'static str,
        /// Identifier that failed to resolve.
        id: i32,
    },
    /// Completing the operation would violate a state invariant.
    #[error("{0}")]
    Conflict(String),
}

impl DomainError {
    /// Shorthand for the `NotFound` variant.
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Conflict(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
