//! Threshold configuration data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ValidationError;

/// The single logical configuration row. There is exactly one, identified
/// by this fixed key rather than an auto-incrementing identity.
pub const THRESHOLD_CONFIG_ID: i32 = 1;

/// Active alert threshold bands for temperature and humidity.
///
/// Invariant: `high_temp > low_temp` and `high_hum > low_hum` hold after
/// every successful update.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ThresholdConfig {
    #[serde(rename = "high_temp_threshold")]
    pub high_temp: f64,
    #[serde(rename = "low_temp_threshold")]
    pub low_temp: f64,
    #[serde(rename = "high_hum_threshold")]
    pub high_hum: f64,
    #[serde(rename = "low_hum_threshold")]
    pub low_hum: f64,
    #[serde(rename = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl ThresholdConfig {
    /// Hard-coded defaults, returned when no row exists yet.
    /// They are never persisted implicitly.
    pub fn default_at(now: DateTime<Utc>) -> Self {
        Self {
            high_temp: 28.0,
            low_temp: 18.0,
            high_hum: 70.0,
            low_hum: 30.0,
            updated_at: now,
        }
    }
}

/// Requested threshold bounds, validated before anything is written
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ThresholdUpdate {
    pub high_temp_threshold: f64,
    pub low_temp_threshold: f64,
    pub high_hum_threshold: f64,
    pub low_hum_threshold: f64,
}

impl ThresholdUpdate {
    /// Turn the request into a config, rejecting inverted bands.
    /// Equal bounds count as inverted.
    pub fn validated(&self, now: DateTime<Utc>) -> Result<ThresholdConfig, ValidationError> {
        if self.high_temp_threshold <= self.low_temp_threshold {
            return Err(ValidationError::InvertedTemperatureBand);
        }
        if self.high_hum_threshold <= self.low_hum_threshold {
            return Err(ValidationError::InvertedHumidityBand);
        }

        Ok(ThresholdConfig {
            high_temp: self.high_temp_threshold,
            low_temp: self.low_temp_threshold,
            high_hum: self.high_hum_threshold,
            low_hum: self.low_hum_threshold,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_update_accepted() {
        let req = ThresholdUpdate {
            high_temp_threshold: 30.0,
            low_temp_threshold: 20.0,
            high_hum_threshold: 60.0,
            low_hum_threshold: 40.0,
        };
        let config = req.validated(Utc::now()).unwrap();
        assert_eq!(config.high_temp, 30.0);
        assert_eq!(config.low_hum, 40.0);
    }

    #[test]
    fn test_inverted_temperature_band_rejected() {
        let req = ThresholdUpdate {
            high_temp_threshold: 10.0,
            low_temp_threshold: 20.0,
            high_hum_threshold: 60.0,
            low_hum_threshold: 40.0,
        };
        assert_eq!(
            req.validated(Utc::now()),
            Err(ValidationError::InvertedTemperatureBand)
        );
    }

    #[test]
    fn test_equal_temperature_bounds_rejected() {
        let req = ThresholdUpdate {
            high_temp_threshold: 20.0,
            low_temp_threshold: 20.0,
            high_hum_threshold: 60.0,
            low_hum_threshold: 40.0,
        };
        assert_eq!(
            req.validated(Utc::now()),
            Err(ValidationError::InvertedTemperatureBand)
        );
    }

    #[test]
    fn test_inverted_humidity_band_rejected() {
        let req = ThresholdUpdate {
            high_temp_threshold: 30.0,
            low_temp_threshold: 20.0,
            high_hum_threshold: 40.0,
            low_hum_threshold: 60.0,
        };
        assert_eq!(
            req.validated(Utc::now()),
            Err(ValidationError::InvertedHumidityBand)
        );
    }
}
