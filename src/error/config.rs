use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::InternalServerError;

/// Configuration errors raised while loading environment variables.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable is set but holds an unusable value.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
