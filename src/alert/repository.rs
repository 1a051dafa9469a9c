//! Alert repository
//!
//! Append-only persistence for triggered alert decisions.

use chrono::Utc;
use sqlx::MySqlPool;

use super::types::AlertDirection;
use crate::error::Result;

/// Alert repository for database operations
#[derive(Clone)]
pub struct AlertRepository {
    pool: MySqlPool,
}

impl AlertRepository {
    /// Create new repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Log a triggered temperature alert
    pub async fn insert_temp_alert(
        &self,
        temperature: f64,
        direction: AlertDirection,
        threshold_value: f64,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO temp_alerts (temperature, alert_type, threshold_value, timestamp)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(temperature)
        .bind(direction.as_str())
        .bind(threshold_value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Log a triggered humidity alert
    pub async fn insert_hum_alert(
        &self,
        humidity: f64,
        direction: AlertDirection,
        threshold_value: f64,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO hum_alerts (humidity, alert_type, threshold_value, timestamp)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(humidity)
        .bind(direction.as_str())
        .bind(threshold_value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
