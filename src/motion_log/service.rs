//! MotionLog service
//!
//! Business logic layer over the raw event tables.

use chrono::Utc;

use super::decoder;
use super::repository::MotionLogRepository;
use super::types::{DecodedMotionEvent, FallReading, SensorStatus};
use crate::error::Result;

/// MotionLog service
pub struct MotionLogService {
    repo: MotionLogRepository,
}

impl MotionLogService {
    /// Create new service
    pub fn new(repo: MotionLogRepository) -> Self {
        Self { repo }
    }

    /// Record a PIR event. The duration arrives still encoded; it is
    /// validated non-negative, stored as-is, and decoded on read.
    pub async fn record_motion(&self, status: &str, raw_duration: i64) -> Result<()> {
        let status = SensorStatus::parse(status)?;
        let raw_duration = super::types::validate_raw_duration(raw_duration)?;
        self.repo.insert_motion(status, raw_duration).await?;

        tracing::debug!(status = status.as_str(), raw_duration, "Motion event recorded");
        Ok(())
    }

    /// Record a vibration event
    pub async fn record_fall(&self, status: &str) -> Result<()> {
        let status = SensorStatus::parse(status)?;
        self.repo.insert_fall(status).await?;

        tracing::debug!(status = status.as_str(), "Fall event recorded");
        Ok(())
    }

    /// Latest PIR reading, decoded. An empty table yields a quiet-room
    /// default rather than an error.
    pub async fn latest_motion(&self) -> Result<DecodedMotionEvent> {
        let event = match self.repo.latest_motion().await? {
            Some(row) => decoder::decode_row(&row),
            None => decoder::empty_reading(Utc::now()),
        };

        Ok(event)
    }

    /// Latest vibration reading, defaulting to NO_MOTION when empty
    pub async fn latest_fall(&self) -> Result<FallReading> {
        let reading = match self.repo.latest_fall().await? {
            Some(row) => FallReading {
                status: SensorStatus::parse(&row.status)
                    .unwrap_or(SensorStatus::NoMotion),
                timestamp: row.timestamp,
            },
            None => FallReading {
                status: SensorStatus::NoMotion,
                timestamp: Utc::now(),
            },
        };

        Ok(reading)
    }
}
