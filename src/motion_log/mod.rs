//! MotionLog - PIR and vibration sensor streams
//!
//! ## Responsibilities
//!
//! - Persist raw motion (PIR) and fall (vibration) events
//! - Decode the firmware's composite duration encoding into
//!   actual seconds plus a fall-risk tier
//! - Serve the latest reading per stream
//!
//! Raw rows are immutable once stored; decoded events are recomputed
//! per request and never persisted.

pub mod decoder;
mod repository;
mod service;
mod types;

pub use decoder::decode;
pub use repository::MotionLogRepository;
pub use service::MotionLogService;
pub use types::*;
