//! Activity analytics data types

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::motion_log::FallRiskLevel;

/// Source stream of a timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    Motion,
    Fall,
}

/// One entry in the merged activity timeline
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub detected: bool,
    /// Decoded seconds for MOTION entries, always 0 for FALL entries
    pub duration: i64,
    /// Present only for MOTION entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fall_risk_level: Option<FallRiskLevel>,
    pub timestamp: DateTime<Utc>,
}

/// Motion session statistics for a window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionSessionSummary {
    pub sessions: i64,
    pub total_seconds: i64,
}

/// Combined activity history response
#[derive(Debug, Clone, Serialize)]
pub struct ActivityHistory {
    pub data: Vec<ActivityEntry>,
    pub count: usize,
    pub period_days: i64,
    pub motion_sessions: i64,
    pub total_motion_time: i64,
    pub fall_count: i64,
}
