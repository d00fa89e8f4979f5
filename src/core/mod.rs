pub mod bridge;
pub mod normalizer;
pub mod transformer;

pub use crate::domain::model::{RawRow, ShipmentRecord, SubmissionResult, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Submitter};
pub use crate::utils::error::Result;
