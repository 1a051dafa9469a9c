//! Climate data types

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One temperature/humidity reading
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClimateReading {
    pub temperature: f64,
    pub humidity: f64,
    pub timestamp: DateTime<Utc>,
}

impl ClimateReading {
    /// Zero reading standing in for an empty table
    pub fn empty_at(now: DateTime<Utc>) -> Self {
        Self {
            temperature: 0.0,
            humidity: 0.0,
            timestamp: now,
        }
    }
}

/// Windowed climate history response
#[derive(Debug, Clone, Serialize)]
pub struct ClimateHistory {
    pub data: Vec<ClimateReading>,
    pub count: usize,
    pub period_days: i64,
}
