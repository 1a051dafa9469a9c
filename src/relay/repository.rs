//! Relay repository

use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use super::types::{RelayRow, RelayState, RELAY_ID};
use crate::error::Result;

/// Relay repository for database operations
#[derive(Clone)]
pub struct RelayRepository {
    pool: MySqlPool,
}

impl RelayRepository {
    /// Create new repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Load the relay row, if one exists
    pub async fn load(&self) -> Result<Option<RelayRow>> {
        let row = sqlx::query_as::<_, RelayRow>(
            "SELECT status, timestamp FROM relay_state WHERE relay_id = ? LIMIT 1",
        )
        .bind(RELAY_ID)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Upsert the relay row in place
    pub async fn save(&self, state: RelayState, at: DateTime<Utc>) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO relay_state (relay_id, status, timestamp)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE
                status = VALUES(status),
                timestamp = VALUES(timestamp)
            "#,
        )
        .bind(RELAY_ID)
        .bind(state.as_str())
        .bind(at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
