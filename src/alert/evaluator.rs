//! Threshold evaluation

use super::types::{AlertDecision, AlertDirection, Metric};
use crate::threshold_store::ThresholdConfig;

/// Evaluate one reading against the band matching its metric.
///
/// Bounds themselves are inside the band: a reading equal to a bound
/// does not trigger.
pub fn evaluate(metric: Metric, value: f64, config: &ThresholdConfig) -> AlertDecision {
    let (high, low) = match metric {
        Metric::Temperature => (config.high_temp, config.low_temp),
        Metric::Humidity => (config.high_hum, config.low_hum),
    };

    if value > high {
        AlertDecision::crossed(AlertDirection::High, high)
    } else if value < low {
        AlertDecision::crossed(AlertDirection::Low, low)
    } else {
        AlertDecision::clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn config() -> ThresholdConfig {
        // Matches the documented defaults: temp 18..28, humidity 30..70
        ThresholdConfig::default_at(Utc::now())
    }

    #[test]
    fn test_temperature_above_high_triggers() {
        let decision = evaluate(Metric::Temperature, 35.0, &config());
        assert!(decision.triggered);
        assert_eq!(decision.direction, AlertDirection::High);
        assert_eq!(decision.threshold_value, Some(28.0));
    }

    #[test]
    fn test_temperature_below_low_triggers() {
        let decision = evaluate(Metric::Temperature, 10.0, &config());
        assert!(decision.triggered);
        assert_eq!(decision.direction, AlertDirection::Low);
        assert_eq!(decision.threshold_value, Some(18.0));
    }

    #[test]
    fn test_temperature_within_band_is_clear() {
        let decision = evaluate(Metric::Temperature, 22.0, &config());
        assert!(!decision.triggered);
        assert_eq!(decision.direction, AlertDirection::None);
        assert_eq!(decision.threshold_value, None);
    }

    #[test]
    fn test_bounds_are_inside_the_band() {
        assert!(!evaluate(Metric::Temperature, 28.0, &config()).triggered);
        assert!(!evaluate(Metric::Temperature, 18.0, &config()).triggered);
    }

    #[test]
    fn test_humidity_uses_its_own_band() {
        let high = evaluate(Metric::Humidity, 80.0, &config());
        assert_eq!(high.direction, AlertDirection::High);
        assert_eq!(high.threshold_value, Some(70.0));

        let low = evaluate(Metric::Humidity, 20.0, &config());
        assert_eq!(low.direction, AlertDirection::Low);
        assert_eq!(low.threshold_value, Some(30.0));
    }
}
