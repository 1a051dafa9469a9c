//! Threshold repository
//!
//! Database access for the single configuration row.

use sqlx::MySqlPool;

use super::types::{ThresholdConfig, THRESHOLD_CONFIG_ID};
use crate::error::Result;

/// Threshold repository for database operations
#[derive(Clone)]
pub struct ThresholdRepository {
    pool: MySqlPool,
}

impl ThresholdRepository {
    /// Create new repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Load the configuration row, if one exists
    pub async fn load(&self) -> Result<Option<ThresholdConfig>> {
        let config = sqlx::query_as::<_, ThresholdConfig>(
            r#"
            SELECT high_temp, low_temp, high_hum, low_hum, updated_at
            FROM threshold_config
            WHERE config_id = ?
            LIMIT 1
            "#,
        )
        .bind(THRESHOLD_CONFIG_ID)
        .fetch_optional(&self.pool)
        .await?;

        Ok(config)
    }

    /// Upsert the configuration row in place.
    ///
    /// The whole row is written in one statement against the fixed key,
    /// so two racing saves can only ever land one complete configuration,
    /// never a hybrid of the two.
    pub async fn save(&self, config: &ThresholdConfig) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO threshold_config
                (config_id, high_temp, low_temp, high_hum, low_hum, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                high_temp = VALUES(high_temp),
                low_temp = VALUES(low_temp),
                high_hum = VALUES(high_hum),
                low_hum = VALUES(low_hum),
                updated_at = VALUES(updated_at)
            "#,
        )
        .bind(THRESHOLD_CONFIG_ID)
        .bind(config.high_temp)
        .bind(config.low_temp)
        .bind(config.high_hum)
        .bind(config.low_hum)
        .bind(config.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
