//! Relay data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ValidationError;

/// The single relay row's fixed key
pub const RELAY_ID: i32 = 1;

/// Relay switch state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelayState {
    On,
    Off,
}

impl RelayState {
    /// Parse the wire string, case-insensitively (devices send both)
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.to_ascii_uppercase().as_str() {
            "ON" => Ok(Self::On),
            "OFF" => Ok(Self::Off),
            _ => Err(ValidationError::InvalidRelayState(s.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

/// Stored relay state (status kept as VARCHAR in MySQL)
#[derive(Debug, Clone, FromRow)]
pub struct RelayRow {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Relay state for the API
#[derive(Debug, Clone, Serialize)]
pub struct RelayStatus {
    pub status: RelayState,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_both_cases() {
        assert_eq!(RelayState::parse("ON").unwrap(), RelayState::On);
        assert_eq!(RelayState::parse("off").unwrap(), RelayState::Off);
    }

    #[test]
    fn test_parse_rejects_unknown_state() {
        assert_eq!(
            RelayState::parse("MAYBE"),
            Err(ValidationError::InvalidRelayState("MAYBE".to_string()))
        );
    }
}
