//! Reading decoder for the firmware's composite duration encoding
//!
//! The device packs a fall-risk tier into the thousands digit and the
//! true session length into the remainder:
//!
//! ```text
//! raw = actual_seconds + risk_tier * 1000
//! ```
//!
//! The magic numbers below are the wire contract with the firmware, not
//! tunable constants. Decoding is total: every non-negative raw value is
//! valid, and anything at or above 5000 classifies as CRITICAL (there is
//! deliberately no upper bound).

use chrono::{DateTime, Utc};

use super::types::{DecodedMotionEvent, FallRiskLevel, MotionRow, SensorStatus};

impl FallRiskLevel {
    /// Classify a raw encoded duration by its thousands tier
    pub fn from_raw(raw_duration: i64) -> Self {
        if raw_duration >= 5000 {
            Self::Critical
        } else if raw_duration >= 4000 {
            Self::HighRisk
        } else if raw_duration >= 3000 {
            Self::ModerateRisk
        } else if raw_duration >= 2000 {
            Self::LowRisk
        } else if raw_duration >= 1000 {
            Self::Safe
        } else {
            Self::Normal
        }
    }
}

/// Decode a raw encoded duration into (actual seconds, risk level)
pub fn decode(raw_duration: i64) -> (i64, FallRiskLevel) {
    (raw_duration % 1000, FallRiskLevel::from_raw(raw_duration))
}

/// Decode a stored PIR row into an ephemeral event
pub fn decode_row(row: &MotionRow) -> DecodedMotionEvent {
    let (duration, risk) = decode(row.raw_duration);
    DecodedMotionEvent {
        detected: SensorStatus::parse(&row.status).map_or(false, SensorStatus::is_detected),
        duration,
        fall_risk_level: risk,
        raw_duration: row.raw_duration,
        timestamp: row.timestamp,
    }
}

/// Decoded event standing in for an empty PIR table.
///
/// Absence of a reading is not an error; the API reports a quiet room.
pub fn empty_reading(now: DateTime<Utc>) -> DecodedMotionEvent {
    DecodedMotionEvent {
        detected: false,
        duration: 0,
        fall_risk_level: FallRiskLevel::Normal,
        raw_duration: 0,
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_is_raw_mod_1000() {
        assert_eq!(decode(0).0, 0);
        assert_eq!(decode(45).0, 45);
        assert_eq!(decode(999).0, 999);
        assert_eq!(decode(1000).0, 0);
        assert_eq!(decode(2345).0, 345);
        assert_eq!(decode(5999).0, 999);
        assert_eq!(decode(12345).0, 345);
    }

    #[test]
    fn test_risk_tier_boundaries() {
        assert_eq!(decode(0).1, FallRiskLevel::Normal);
        assert_eq!(decode(999).1, FallRiskLevel::Normal);
        assert_eq!(decode(1000).1, FallRiskLevel::Safe);
        assert_eq!(decode(1999).1, FallRiskLevel::Safe);
        assert_eq!(decode(2000).1, FallRiskLevel::LowRisk);
        assert_eq!(decode(2999).1, FallRiskLevel::LowRisk);
        assert_eq!(decode(3000).1, FallRiskLevel::ModerateRisk);
        assert_eq!(decode(3999).1, FallRiskLevel::ModerateRisk);
        assert_eq!(decode(4000).1, FallRiskLevel::HighRisk);
        assert_eq!(decode(4999).1, FallRiskLevel::HighRisk);
        assert_eq!(decode(5000).1, FallRiskLevel::Critical);
        assert_eq!(decode(5999).1, FallRiskLevel::Critical);
    }

    #[test]
    fn test_no_upper_bound_still_critical() {
        // Firmware contract: values past the defined tiers stay CRITICAL
        assert_eq!(decode(6000).1, FallRiskLevel::Critical);
        assert_eq!(decode(987654).1, FallRiskLevel::Critical);
    }

    #[test]
    fn test_empty_reading_is_a_quiet_room() {
        let now = Utc::now();
        let event = empty_reading(now);
        assert!(!event.detected);
        assert_eq!(event.duration, 0);
        assert_eq!(event.fall_risk_level, FallRiskLevel::Normal);
        assert_eq!(event.raw_duration, 0);
        assert_eq!(event.timestamp, now);
    }

    #[test]
    fn test_decode_row() {
        let row = MotionRow {
            status: "NO_MOTION".to_string(),
            raw_duration: 3042,
            timestamp: Utc::now(),
        };
        let event = decode_row(&row);
        assert!(!event.detected);
        assert_eq!(event.duration, 42);
        assert_eq!(event.fall_risk_level, FallRiskLevel::ModerateRisk);
        assert_eq!(event.raw_duration, 3042);
    }
}
