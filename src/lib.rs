pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::submission::SubmissionClient;
pub use config::ServerConfig;
pub use core::bridge::ShipmentBridge;
pub use domain::model::{ItemOutcome, RawRow, ShipmentRecord, SubmissionResult};
pub use utils::error::{BridgeError, Result};
