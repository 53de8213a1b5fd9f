//! Environment-based server configuration.

use crate::error::config::ConfigError;

/// Runtime configuration loaded from environment variables.
pub struct Config {
    /// Connection string for the relational database.
    pub database_url: String,
    /// Address the HTTP server binds to, e.g. `0.0.0.0:8080`.
    pub bind_address: String,
}

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

impl Config {
    /// Loads configuration from the environment.
    ///
    /// `DATABASE_URL` is required; `BIND_ADDRESS` falls back to
    /// `0.0.0.0:8080` when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}
