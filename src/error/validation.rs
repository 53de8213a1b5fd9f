use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::model::api::{FieldErrorDto, ValidationErrorDto};

/// A request body that failed field-level validation.
///
/// Carries one entry per offending field so the 400 response can report
/// `detalles: [{campo, mensaje}]` alongside the generic message.
#[derive(Error, Debug)]
#[error("Request validation failed")]
pub struct ValidationFailure {
    /// Field/message pairs describing each rejected value.
    pub details: Vec<FieldErrorDto>,
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let details = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(|err| FieldErrorDto {
                    campo: field.to_string(),
                    mensaje: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();

        Self { details }
    }
}

impl IntoResponse for ValidationFailure {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                error: "Request validation failed".to_string(),
                detalles: self.details,
            }),
        )
            .into_response()
    }
}
