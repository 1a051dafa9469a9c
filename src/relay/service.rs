//! Relay service

use chrono::Utc;

use super::repository::RelayRepository;
use super::types::{RelayState, RelayStatus};
use crate::error::Result;

/// Relay service
pub struct RelayService {
    repo: RelayRepository,
}

impl RelayService {
    /// Create new service
    pub fn new(repo: RelayRepository) -> Self {
        Self { repo }
    }

    /// Current relay state, OFF when no row exists yet
    pub async fn status(&self) -> Result<RelayStatus> {
        let status = match self.repo.load().await? {
            Some(row) => RelayStatus {
                status: RelayState::parse(&row.status).unwrap_or(RelayState::Off),
                timestamp: row.timestamp,
            },
            None => RelayStatus {
                status: RelayState::Off,
                timestamp: Utc::now(),
            },
        };

        Ok(status)
    }

    /// Switch the relay. Unknown states are rejected before any write.
    pub async fn switch(&self, requested: &str) -> Result<RelayStatus> {
        let state = RelayState::parse(requested)?;
        let now = Utc::now();
        self.repo.save(state, now).await?;

        tracing::info!(state = state.as_str(), "Relay switched");

        Ok(RelayStatus {
            status: state,
            timestamp: now,
        })
    }
}
