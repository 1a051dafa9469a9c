//! MotionLog data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ValidationError;

/// Sensor status as reported by the device firmware.
///
/// Both the PIR stream and the vibration stream use the same two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SensorStatus {
    Detected,
    NoMotion,
}

impl SensorStatus {
    /// Parse the wire string ("DETECTED" / "NO_MOTION")
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "DETECTED" => Ok(Self::Detected),
            "NO_MOTION" => Ok(Self::NoMotion),
            other => Err(ValidationError::InvalidSensorStatus(other.to_string())),
        }
    }

    pub fn is_detected(self) -> bool {
        matches!(self, Self::Detected)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Detected => "DETECTED",
            Self::NoMotion => "NO_MOTION",
        }
    }
}

/// Check an incoming encoded duration against the data model.
///
/// The firmware encoding is defined over non-negative integers only;
/// a negative value would decode to a negative timeline duration, so it
/// is rejected before anything is stored.
pub fn validate_raw_duration(raw_duration: i64) -> Result<i64, ValidationError> {
    if raw_duration < 0 {
        return Err(ValidationError::NegativeRawDuration(raw_duration));
    }
    Ok(raw_duration)
}

/// Raw PIR row as stored (status kept as VARCHAR in MySQL)
#[derive(Debug, Clone, FromRow)]
pub struct MotionRow {
    pub status: String,
    pub raw_duration: i64,
    pub timestamp: DateTime<Utc>,
}

/// Raw vibration row as stored
#[derive(Debug, Clone, FromRow)]
pub struct FallRow {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Fall-risk tier packed into the thousands digit of the raw duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FallRiskLevel {
    Normal,
    Safe,
    LowRisk,
    ModerateRisk,
    HighRisk,
    Critical,
}

/// Decoded PIR event, recomputed per request
#[derive(Debug, Clone, Serialize)]
pub struct DecodedMotionEvent {
    pub detected: bool,
    /// Actual motion seconds in [0, 999]
    pub duration: i64,
    pub fall_risk_level: FallRiskLevel,
    /// Original encoded value, retained for diagnostics
    pub raw_duration: i64,
    pub timestamp: DateTime<Utc>,
}

/// Latest vibration reading for the API
#[derive(Debug, Clone, Serialize)]
pub struct FallReading {
    pub status: SensorStatus,
    pub timestamp: DateTime<Utc>,
}
