//! Alert data types

use serde::{Deserialize, Serialize};

/// Metric a threshold band applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Metric {
    Temperature,
    Humidity,
}

/// Which bound a reading crossed, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertDirection {
    High,
    Low,
    None,
}

impl AlertDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Low => "LOW",
            Self::None => "NONE",
        }
    }
}

/// Outcome of evaluating one reading against the active bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlertDecision {
    pub triggered: bool,
    pub direction: AlertDirection,
    /// The bound that was crossed, absent when nothing triggered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_value: Option<f64>,
}

impl AlertDecision {
    pub fn clear() -> Self {
        Self {
            triggered: false,
            direction: AlertDirection::None,
            threshold_value: None,
        }
    }

    pub fn crossed(direction: AlertDirection, threshold_value: f64) -> Self {
        Self {
            triggered: true,
            direction,
            threshold_value: Some(threshold_value),
        }
    }
}

/// Both decisions for one climate reading
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClimateAlerts {
    pub temperature: AlertDecision,
    pub humidity: AlertDecision,
}
