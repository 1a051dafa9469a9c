//! MotionLog repository
//!
//! Database access layer for the PIR and vibration event tables.
//! All history queries return rows ascending by timestamp.

use chrono::Utc;
use sqlx::MySqlPool;

use super::types::{FallRow, MotionRow, SensorStatus};
use crate::error::Result;

/// MotionLog repository for database operations
#[derive(Clone)]
pub struct MotionLogRepository {
    pool: MySqlPool,
}

impl MotionLogRepository {
    /// Create new repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a PIR event with its encoded duration
    pub async fn insert_motion(&self, status: SensorStatus, raw_duration: i64) -> Result<()> {
        sqlx::query("INSERT INTO motion_events (status, raw_duration, timestamp) VALUES (?, ?, ?)")
            .bind(status.as_str())
            .bind(raw_duration)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a vibration event
    pub async fn insert_fall(&self, status: SensorStatus) -> Result<()> {
        sqlx::query("INSERT INTO fall_events (status, timestamp) VALUES (?, ?)")
            .bind(status.as_str())
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// PIR events within the last `days` days, ascending by timestamp
    pub async fn fetch_motion_since(&self, days: i64) -> Result<Vec<MotionRow>> {
        let rows = sqlx::query_as::<_, MotionRow>(
            r#"
            SELECT status, raw_duration, timestamp
            FROM motion_events
            WHERE timestamp >= DATE_SUB(NOW(), INTERVAL ? DAY)
            ORDER BY timestamp ASC
            "#,
        )
        .bind(days)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Vibration events within the last `days` days, ascending by timestamp
    pub async fn fetch_falls_since(&self, days: i64) -> Result<Vec<FallRow>> {
        let rows = sqlx::query_as::<_, FallRow>(
            r#"
            SELECT status, timestamp
            FROM fall_events
            WHERE timestamp >= DATE_SUB(NOW(), INTERVAL ? DAY)
            ORDER BY timestamp ASC
            "#,
        )
        .bind(days)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Latest PIR event, if any
    pub async fn latest_motion(&self) -> Result<Option<MotionRow>> {
        let row = sqlx::query_as::<_, MotionRow>(
            "SELECT status, raw_duration, timestamp FROM motion_events ORDER BY timestamp DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Latest vibration event, if any
    pub async fn latest_fall(&self) -> Result<Option<FallRow>> {
        let row = sqlx::query_as::<_, FallRow>(
            "SELECT status, timestamp FROM fall_events ORDER BY timestamp DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
