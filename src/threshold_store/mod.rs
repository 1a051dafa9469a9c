//! ThresholdStore - the single mutable configuration record
//!
//! ## Responsibilities
//!
//! - Serve the active threshold configuration (or documented defaults)
//! - Apply validated updates to the one logical row
//! - Serialize concurrent updates so no hybrid configuration can form
//!
//! Reads never mutate state; a successful update is the sole writer.

mod repository;
mod types;

pub use repository::ThresholdRepository;
pub use types::*;

use chrono::Utc;
use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::error::Result;

/// In-memory snapshot of the configuration plus the update gate.
///
/// `snapshot` serves concurrent readers; `begin_update` hands out the
/// mutex that orders every read-modify-write.
#[derive(Default)]
pub struct ThresholdCell {
    current: RwLock<Option<ThresholdConfig>>,
    write_gate: Mutex<()>,
}

impl ThresholdCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consistent snapshot of the current configuration
    pub async fn snapshot(&self) -> Option<ThresholdConfig> {
        self.current.read().await.clone()
    }

    /// Acquire the update gate. Held across validate + persist + install.
    pub async fn begin_update(&self) -> MutexGuard<'_, ()> {
        self.write_gate.lock().await
    }

    /// Install a validated configuration as the current snapshot
    pub async fn install(&self, config: ThresholdConfig) {
        *self.current.write().await = Some(config);
    }
}

/// ThresholdStore instance
pub struct ThresholdStore {
    repo: ThresholdRepository,
    cell: ThresholdCell,
}

impl ThresholdStore {
    /// Create a new store, priming the snapshot from storage
    pub async fn new(repo: ThresholdRepository) -> Result<Self> {
        let cell = ThresholdCell::new();
        if let Some(config) = repo.load().await? {
            cell.install(config).await;
        }

        Ok(Self { repo, cell })
    }

    /// Current configuration. Falls back to the stored row, then to the
    /// hard-coded defaults; the defaults are never persisted here.
    pub async fn get(&self) -> Result<ThresholdConfig> {
        if let Some(config) = self.cell.snapshot().await {
            return Ok(config);
        }

        match self.repo.load().await? {
            Some(config) => Ok(config),
            None => Ok(ThresholdConfig::default_at(Utc::now())),
        }
    }

    /// Apply an update: validate, persist the full row, then publish.
    /// A rejected request leaves the prior configuration in effect.
    pub async fn update(&self, req: ThresholdUpdate) -> Result<ThresholdConfig> {
        let _gate = self.cell.begin_update().await;

        let config = req.validated(Utc::now())?;
        self.repo.save(&config).await?;
        self.cell.install(config.clone()).await;

        tracing::info!(
            high_temp = config.high_temp,
            low_temp = config.low_temp,
            high_hum = config.high_hum,
            low_hum = config.low_hum,
            "Threshold configuration updated"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn update(high_temp: f64, low_temp: f64) -> ThresholdUpdate {
        ThresholdUpdate {
            high_temp_threshold: high_temp,
            low_temp_threshold: low_temp,
            high_hum_threshold: 60.0,
            low_hum_threshold: 40.0,
        }
    }

    #[tokio::test]
    async fn test_snapshot_empty_until_install() {
        let cell = ThresholdCell::new();
        assert!(cell.snapshot().await.is_none());

        let config = update(30.0, 20.0).validated(Utc::now()).unwrap();
        cell.install(config.clone()).await;
        assert_eq!(cell.snapshot().await, Some(config));
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_snapshot_unchanged() {
        let cell = ThresholdCell::new();
        let initial = update(30.0, 20.0).validated(Utc::now()).unwrap();
        cell.install(initial.clone()).await;

        // Same sequence the store runs: gate, validate, install on success
        let _gate = cell.begin_update().await;
        assert!(update(10.0, 20.0).validated(Utc::now()).is_err());
        drop(_gate);

        assert_eq!(cell.snapshot().await, Some(initial));
    }

    #[tokio::test]
    async fn test_concurrent_updates_never_expose_inverted_bands() {
        let cell = Arc::new(ThresholdCell::new());
        cell.install(update(28.0, 18.0).validated(Utc::now()).unwrap())
            .await;

        let mut tasks = Vec::new();
        for i in 0..32i64 {
            let cell = Arc::clone(&cell);
            tasks.push(tokio::spawn(async move {
                // Half the writers attempt an inverted band
                let req = if i % 2 == 0 {
                    update(25.0 + i as f64, 15.0 + i as f64)
                } else {
                    update(10.0, 20.0)
                };

                let _gate = cell.begin_update().await;
                if let Ok(config) = req.validated(Utc::now()) {
                    cell.install(config).await;
                }
            }));
        }

        // Readers race the writers and must only ever see valid bands
        for _ in 0..32 {
            let cell = Arc::clone(&cell);
            tasks.push(tokio::spawn(async move {
                if let Some(config) = cell.snapshot().await {
                    assert!(config.high_temp > config.low_temp);
                    assert!(config.high_hum > config.low_hum);
                }
            }));
        }

        for task in tasks {
            task.await.unwrap();
        }

        let final_config = cell.snapshot().await.unwrap();
        assert!(final_config.high_temp > final_config.low_temp);
        assert!(final_config.high_hum > final_config.low_hum);
    }
}
