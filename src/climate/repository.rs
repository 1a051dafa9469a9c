//! Climate repository

use chrono::Utc;
use sqlx::MySqlPool;

use super::types::ClimateReading;
use crate::error::Result;

/// Climate repository for database operations
#[derive(Clone)]
pub struct ClimateRepository {
    pool: MySqlPool,
}

impl ClimateRepository {
    /// Create new repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a new reading
    pub async fn insert(&self, temperature: f64, humidity: f64) -> Result<()> {
        sqlx::query("INSERT INTO climate_readings (temperature, humidity, timestamp) VALUES (?, ?, ?)")
            .bind(temperature)
            .bind(humidity)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Latest reading, if any
    pub async fn latest(&self) -> Result<Option<ClimateReading>> {
        let reading = sqlx::query_as::<_, ClimateReading>(
            "SELECT temperature, humidity, timestamp FROM climate_readings ORDER BY timestamp DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(reading)
    }

    /// Readings within the last `days` days, ascending by timestamp
    pub async fn fetch_since(&self, days: i64) -> Result<Vec<ClimateReading>> {
        let readings = sqlx::query_as::<_, ClimateReading>(
            r#"
            SELECT temperature, humidity, timestamp
            FROM climate_readings
            WHERE timestamp >= DATE_SUB(NOW(), INTERVAL ? DAY)
            ORDER BY timestamp ASC
            "#,
        )
        .bind(days)
        .fetch_all(&self.pool)
        .await?;

        Ok(readings)
    }
}
