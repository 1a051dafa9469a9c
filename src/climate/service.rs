//! Climate service

use chrono::Utc;

use super::repository::ClimateRepository;
use super::types::{ClimateHistory, ClimateReading};
use crate::error::Result;
use crate::models::clamp_window_days;

/// Climate service
pub struct ClimateService {
    repo: ClimateRepository,
}

impl ClimateService {
    /// Create new service
    pub fn new(repo: ClimateRepository) -> Self {
        Self { repo }
    }

    /// Record a new reading
    pub async fn record(&self, temperature: f64, humidity: f64) -> Result<()> {
        self.repo.insert(temperature, humidity).await?;

        tracing::debug!(temperature, humidity, "Climate reading recorded");
        Ok(())
    }

    /// Latest reading, defaulting to zeros when the table is empty
    pub async fn latest(&self) -> Result<ClimateReading> {
        let reading = match self.repo.latest().await? {
            Some(reading) => reading,
            None => ClimateReading::empty_at(Utc::now()),
        };

        Ok(reading)
    }

    /// Readings for the last `days` days (clamped)
    pub async fn history(&self, days: Option<i64>) -> Result<ClimateHistory> {
        let days = clamp_window_days(days);
        let data = self.repo.fetch_since(days).await?;

        Ok(ClimateHistory {
            count: data.len(),
            data,
            period_days: days,
        })
    }
}
