use serde::{Deserialize, Serialize};

/// The response body when an API request fails.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response body for a 400 validation failure.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationErrorDto {
    /// The error message
    pub error: String,
    /// One entry per rejected field
    pub detalles: Vec<FieldErrorDto>,
}

/// A single field/message pair inside a validation failure response.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldErrorDto {
    /// Name of the rejected field
    pub campo: String,
    /// Why the value was rejected
    pub mensaje: String,
}
