//! Shared models and types
//!
//! Types shared across multiple modules to avoid circular dependencies.

use serde::{Deserialize, Serialize};

/// Standard API response wrapper for ingestion acknowledgements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub db_connected: bool,
}

/// Default history window in days
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Clamp a `days` query parameter to the inclusive [1, 365] range.
///
/// Out-of-range or missing values silently become the 7-day default,
/// they are never rejected.
pub fn clamp_window_days(days: Option<i64>) -> i64 {
    match days {
        Some(d) if (1..=365).contains(&d) => d,
        _ => DEFAULT_WINDOW_DAYS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_in_range_passes_through() {
        assert_eq!(clamp_window_days(Some(1)), 1);
        assert_eq!(clamp_window_days(Some(30)), 30);
        assert_eq!(clamp_window_days(Some(365)), 365);
    }

    #[test]
    fn test_window_out_of_range_defaults() {
        assert_eq!(clamp_window_days(Some(0)), 7);
        assert_eq!(clamp_window_days(Some(-3)), 7);
        assert_eq!(clamp_window_days(Some(366)), 7);
    }

    #[test]
    fn test_window_missing_defaults() {
        assert_eq!(clamp_window_days(None), 7);
    }
}
