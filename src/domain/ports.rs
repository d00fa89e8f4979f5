use crate::domain::model::{ShipmentRecord, SubmissionResult};
use crate::utils::error::Result;
use crate::utils::retry::RetryPolicy;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn submission_endpoint(&self) -> &str;
    fn retry_policy(&self) -> RetryPolicy;
    fn request_timeout(&self) -> Option<Duration>;
}

/// Delivers a batch of shipment records to the downstream order API.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, records: &[ShipmentRecord]) -> Result<SubmissionResult>;
}
