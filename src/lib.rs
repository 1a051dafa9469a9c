//! Sensorhub - room monitoring backend
//!
//! ## Architecture (6 Components)
//!
//! 1. MotionLog - PIR/vibration persistence + duration decoding
//! 2. Activity - motion sessions and merged activity timeline
//! 3. Climate - temperature/humidity readings
//! 4. ThresholdStore - the singleton alert configuration
//! 5. Alert - threshold evaluation + alert logging
//! 6. WebAPI - REST API endpoints (plus the relay actuator singleton)
//!
//! ## Design Principles
//!
//! - Raw sensor rows are immutable; everything derived is recomputed
//!   per request
//! - The only mutable state is the two fixed-key singleton rows
//!   (thresholds, relay)
//! - Storage failures fail the enclosing request; no retries

pub mod activity;
pub mod alert;
pub mod climate;
pub mod error;
pub mod models;
pub mod motion_log;
pub mod relay;
pub mod state;
pub mod threshold_store;
pub mod web_api;

pub use error::{Error, Result, ValidationError};
pub use state::AppState;
