//! Activity analytics
//!
//! ## Responsibilities
//!
//! - Reconstruct motion sessions from the decoded PIR stream
//! - Merge PIR and vibration streams into one chronological timeline
//! - Serve the combined activity history for a clamped day window
//!
//! Everything here is computed fresh per request from raw rows; no
//! derived value persists across requests.

mod service;
mod types;

pub use service::{aggregate_sessions, merge_timeline, ActivityService};
pub use types::*;
