//! Relay control - the ON/OFF actuator singleton
//!
//! Like the threshold configuration, the relay is one fixed-key row
//! overwritten in place; the whole row is written in a single upsert so
//! concurrent switches land one complete state or the other.

mod repository;
mod service;
mod types;

pub use repository::RelayRepository;
pub use service::RelayService;
pub use types::*;
