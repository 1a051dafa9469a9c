//! Alert evaluation and logging
//!
//! ## Responsibilities
//!
//! - Compare climate readings against the active threshold bands
//! - Persist triggered alert decisions per metric
//!
//! Evaluation itself is pure; called once per new reading. Alert history
//! is append-only, the evaluator never reads it back.

mod evaluator;
mod repository;
mod service;
mod types;

pub use evaluator::evaluate;
pub use repository::AlertRepository;
pub use service::{triggered_alerts, AlertService, TriggeredAlert};
pub use types::*;
