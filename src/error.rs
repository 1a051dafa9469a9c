//! Error handling for the sensorhub service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable validation failures reported back to the caller.
///
/// A rejected update leaves stored state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// High temperature threshold must be strictly greater than the low one
    #[error("high temperature threshold must be greater than low temperature threshold")]
    InvertedTemperatureBand,

    /// High humidity threshold must be strictly greater than the low one
    #[error("high humidity threshold must be greater than low humidity threshold")]
    InvertedHumidityBand,

    /// Relay state must be ON or OFF
    #[error("invalid relay state {0:?}, expected ON or OFF")]
    InvalidRelayState(String),

    /// Sensor status outside its documented domain
    #[error("invalid sensor status {0:?}")]
    InvalidSensorStatus(String),

    /// Encoded motion durations are non-negative by the data model
    #[error("negative raw duration {0}")]
    NegativeRawDuration(i64),
}

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Validation error (caller input rejected, state unchanged)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage collaborator failed; no retry, the enclosing request fails
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            Error::Validation(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            Error::Storage(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                e.to_string(),
            ),
            Error::Serialization(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SERIALIZATION_ERROR",
                e.to_string(),
            ),
        };

        tracing::error!(
            status = %status,
            error_code = %error_code,
            message = %message,
            "Request error"
        );

        let body = Json(json!({
            "error_code": error_code,
            "message": message
        }));

        (status, body).into_response()
    }
}
