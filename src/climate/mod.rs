//! Climate - temperature/humidity readings
//!
//! ## Responsibilities
//!
//! - Persist DHT sensor readings
//! - Serve the latest reading and a windowed history
//!
//! Threshold evaluation of new readings lives in the alert module.

mod repository;
mod service;
mod types;

pub use repository::ClimateRepository;
pub use service::ClimateService;
pub use types::*;
