//! Alert service
//!
//! Evaluates readings against the current threshold configuration and
//! delegates persistence of triggered decisions to the repository.

use std::sync::Arc;

use super::evaluator::evaluate;
use super::repository::AlertRepository;
use super::types::{AlertDirection, ClimateAlerts, Metric};
use crate::error::Result;
use crate::threshold_store::ThresholdStore;

/// One decision that crossed a bound, paired with its reading and the
/// bound the evaluator reported
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggeredAlert {
    pub metric: Metric,
    pub value: f64,
    pub direction: AlertDirection,
    pub threshold_value: f64,
}

/// Collect the decisions from one climate evaluation that actually
/// triggered. Clear decisions produce nothing to persist.
pub fn triggered_alerts(
    temperature: f64,
    humidity: f64,
    alerts: &ClimateAlerts,
) -> Vec<TriggeredAlert> {
    let mut pending = Vec::new();

    if let Some(threshold_value) = alerts.temperature.threshold_value {
        pending.push(TriggeredAlert {
            metric: Metric::Temperature,
            value: temperature,
            direction: alerts.temperature.direction,
            threshold_value,
        });
    }

    if let Some(threshold_value) = alerts.humidity.threshold_value {
        pending.push(TriggeredAlert {
            metric: Metric::Humidity,
            value: humidity,
            direction: alerts.humidity.direction,
            threshold_value,
        });
    }

    pending
}

/// Alert service
pub struct AlertService {
    thresholds: Arc<ThresholdStore>,
    repo: AlertRepository,
}

impl AlertService {
    /// Create new service
    pub fn new(thresholds: Arc<ThresholdStore>, repo: AlertRepository) -> Self {
        Self { thresholds, repo }
    }

    /// Evaluate one climate reading on both metrics, logging whatever
    /// triggered. Both metrics see the same configuration snapshot.
    pub async fn evaluate_climate(&self, temperature: f64, humidity: f64) -> Result<ClimateAlerts> {
        let config = self.thresholds.get().await?;

        let alerts = ClimateAlerts {
            temperature: evaluate(Metric::Temperature, temperature, &config),
            humidity: evaluate(Metric::Humidity, humidity, &config),
        };

        for alert in triggered_alerts(temperature, humidity, &alerts) {
            match alert.metric {
                Metric::Temperature => {
                    self.repo
                        .insert_temp_alert(alert.value, alert.direction, alert.threshold_value)
                        .await?;
                }
                Metric::Humidity => {
                    self.repo
                        .insert_hum_alert(alert.value, alert.direction, alert.threshold_value)
                        .await?;
                }
            }
            tracing::info!(
                metric = ?alert.metric,
                value = alert.value,
                direction = alert.direction.as_str(),
                threshold = alert.threshold_value,
                "Alert logged"
            );
        }

        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold_store::ThresholdConfig;
    use chrono::Utc;

    fn climate_alerts(temperature: f64, humidity: f64) -> ClimateAlerts {
        // Documented defaults: temp 18..28, humidity 30..70
        let config = ThresholdConfig::default_at(Utc::now());
        ClimateAlerts {
            temperature: evaluate(Metric::Temperature, temperature, &config),
            humidity: evaluate(Metric::Humidity, humidity, &config),
        }
    }

    #[test]
    fn test_clear_decisions_persist_nothing() {
        let alerts = climate_alerts(22.0, 50.0);
        assert!(triggered_alerts(22.0, 50.0, &alerts).is_empty());
    }

    #[test]
    fn test_triggered_alert_carries_evaluator_bound() {
        let alerts = climate_alerts(35.0, 50.0);
        let pending = triggered_alerts(35.0, 50.0, &alerts);

        assert_eq!(
            pending,
            vec![TriggeredAlert {
                metric: Metric::Temperature,
                value: 35.0,
                direction: AlertDirection::High,
                threshold_value: 28.0,
            }]
        );
    }

    #[test]
    fn test_both_metrics_can_trigger_on_one_reading() {
        let alerts = climate_alerts(10.0, 80.0);
        let pending = triggered_alerts(10.0, 80.0, &alerts);

        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].metric, Metric::Temperature);
        assert_eq!(pending[0].direction, AlertDirection::Low);
        assert_eq!(pending[0].threshold_value, 18.0);
        assert_eq!(pending[1].metric, Metric::Humidity);
        assert_eq!(pending[1].direction, AlertDirection::High);
        assert_eq!(pending[1].threshold_value, 70.0);
    }
}
