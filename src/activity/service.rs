//! Activity analytics service
//!
//! Session aggregation and timeline merging over the decoded streams.

use super::types::{ActivityEntry, ActivityHistory, ActivityKind, MotionSessionSummary};
use crate::error::Result;
use crate::models::clamp_window_days;
use crate::motion_log::{decoder, DecodedMotionEvent, FallRow, MotionLogRepository, SensorStatus};

/// Fold decoded PIR events into session statistics.
///
/// The device reports a session length only when the motion episode
/// closes: a NO_MOTION event with a positive duration marks one complete
/// session. DETECTED events and zero-duration NO_MOTION events never
/// contribute. Input is expected ascending by timestamp; an empty window
/// yields zeros.
pub fn aggregate_sessions(events: &[DecodedMotionEvent]) -> MotionSessionSummary {
    let mut summary = MotionSessionSummary::default();
    for event in events {
        if !event.detected && event.duration > 0 {
            summary.sessions += 1;
            summary.total_seconds += event.duration;
        }
    }
    summary
}

/// Merge decoded PIR events and raw vibration rows into one timeline,
/// ascending by timestamp.
///
/// Motion entries are concatenated before fall entries and the sort is
/// stable, so at equal timestamps a motion entry precedes a fall entry.
/// That tie-break is part of the wire contract.
pub fn merge_timeline(motion: &[DecodedMotionEvent], falls: &[FallRow]) -> Vec<ActivityEntry> {
    let mut entries: Vec<ActivityEntry> = motion
        .iter()
        .map(|e| ActivityEntry {
            kind: ActivityKind::Motion,
            detected: e.detected,
            duration: e.duration,
            fall_risk_level: Some(e.fall_risk_level),
            timestamp: e.timestamp,
        })
        .chain(falls.iter().map(|f| ActivityEntry {
            kind: ActivityKind::Fall,
            detected: SensorStatus::parse(&f.status).map_or(false, SensorStatus::is_detected),
            duration: 0,
            fall_risk_level: None,
            timestamp: f.timestamp,
        }))
        .collect();

    entries.sort_by_key(|e| e.timestamp);
    entries
}

/// Activity analytics service
pub struct ActivityService {
    repo: MotionLogRepository,
}

impl ActivityService {
    /// Create new service
    pub fn new(repo: MotionLogRepository) -> Self {
        Self { repo }
    }

    /// Combined activity history for the last `days` days (clamped)
    pub async fn history(&self, days: Option<i64>) -> Result<ActivityHistory> {
        let days = clamp_window_days(days);

        let motion_rows = self.repo.fetch_motion_since(days).await?;
        let fall_rows = self.repo.fetch_falls_since(days).await?;

        let motion: Vec<DecodedMotionEvent> =
            motion_rows.iter().map(decoder::decode_row).collect();

        let sessions = aggregate_sessions(&motion);
        // Fall count is independent of the merged ordering
        let fall_count = fall_rows
            .iter()
            .filter(|f| SensorStatus::parse(&f.status).map_or(false, SensorStatus::is_detected))
            .count() as i64;

        let data = merge_timeline(&motion, &fall_rows);

        tracing::debug!(
            days,
            entries = data.len(),
            motion_sessions = sessions.sessions,
            fall_count,
            "Activity history computed"
        );

        Ok(ActivityHistory {
            count: data.len(),
            data,
            period_days: days,
            motion_sessions: sessions.sessions,
            total_motion_time: sessions.total_seconds,
            fall_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion_log::FallRiskLevel;
    use chrono::{Duration, Utc};

    fn motion(detected: bool, duration: i64, offset_secs: i64) -> DecodedMotionEvent {
        DecodedMotionEvent {
            detected,
            duration,
            fall_risk_level: FallRiskLevel::Normal,
            raw_duration: duration,
            timestamp: Utc::now() + Duration::seconds(offset_secs),
        }
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        assert_eq!(aggregate_sessions(&[]), MotionSessionSummary::default());
    }

    #[test]
    fn test_aggregate_counts_closed_sessions_only() {
        let events = vec![
            motion(true, 0, 0),
            motion(false, 45, 10),
            motion(false, 0, 20),
        ];
        let summary = aggregate_sessions(&events);
        assert_eq!(summary.sessions, 1);
        assert_eq!(summary.total_seconds, 45);
    }

    #[test]
    fn test_aggregate_sums_multiple_sessions() {
        let events = vec![
            motion(false, 30, 0),
            motion(true, 120, 10), // detected never contributes, even with a duration
            motion(false, 70, 20),
        ];
        let summary = aggregate_sessions(&events);
        assert_eq!(summary.sessions, 2);
        assert_eq!(summary.total_seconds, 100);
    }

    #[test]
    fn test_merge_sorted_by_timestamp() {
        let base = Utc::now();
        let motion_events = vec![motion(false, 10, 0), motion(true, 0, 40)];
        let falls = vec![
            FallRow {
                status: "DETECTED".to_string(),
                timestamp: base + Duration::seconds(20),
            },
            FallRow {
                status: "NO_MOTION".to_string(),
                timestamp: base + Duration::seconds(60),
            },
        ];

        let merged = merge_timeline(&motion_events, &falls);
        assert_eq!(merged.len(), 4);
        for pair in merged.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn test_merge_tie_break_motion_before_fall() {
        let ts = Utc::now();
        let motion_events = vec![DecodedMotionEvent {
            detected: true,
            duration: 5,
            fall_risk_level: FallRiskLevel::Safe,
            raw_duration: 1005,
            timestamp: ts,
        }];
        let falls = vec![FallRow {
            status: "DETECTED".to_string(),
            timestamp: ts,
        }];

        let merged = merge_timeline(&motion_events, &falls);
        assert_eq!(merged[0].kind, ActivityKind::Motion);
        assert_eq!(merged[1].kind, ActivityKind::Fall);
    }

    #[test]
    fn test_fall_entries_have_zero_duration_and_no_risk() {
        let falls = vec![FallRow {
            status: "DETECTED".to_string(),
            timestamp: Utc::now(),
        }];
        let merged = merge_timeline(&[], &falls);
        assert_eq!(merged[0].duration, 0);
        assert!(merged[0].fall_risk_level.is_none());
        assert!(merged[0].detected);
    }
}
