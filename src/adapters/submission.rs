use crate::domain::model::{ItemOutcome, ShipmentRecord, SubmissionResult};
use crate::domain::ports::{ConfigProvider, Submitter};
use crate::utils::error::{BridgeError, Result};
use crate::utils::retry::{retry_async, RetryPolicy};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;

pub const DEFAULT_STATUS: &str = "unknown";
pub const DEFAULT_MESSAGE: &str = "No message provided";
pub const DEFAULT_EXECUTION_TIME: &str = "N/A";

/// reqwest-backed [`Submitter`] for the downstream order API.
pub struct SubmissionClient {
    client: Client,
    endpoint: String,
    retry: RetryPolicy,
}

impl SubmissionClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| BridgeError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self::with_client(
            client,
            config.submission_endpoint(),
            config.retry_policy(),
        ))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            retry,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_once(&self, attempt: u32, body: Vec<u8>) -> Result<String> {
        tracing::debug!("POST {} (attempt {})", self.endpoint, attempt);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("Downstream response status: {}", status);

        if !status.is_success() {
            return Err(BridgeError::RemoteError {
                status: Some(status.as_u16()),
                body: Some(text),
                message: format!("Downstream API responded with HTTP {}", status),
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl Submitter for SubmissionClient {
    async fn submit(&self, records: &[ShipmentRecord]) -> Result<SubmissionResult> {
        if records.is_empty() {
            return Err(BridgeError::ValidationError {
                message: "No shipment records to submit".to_string(),
            });
        }

        let body = serde_json::to_vec(records)?;
        let text = retry_async(&self.retry, "Shipment submission", |attempt| {
            let body = body.clone();
            async move { self.post_once(attempt, body).await }
        })
        .await?;

        let response: Value = serde_json::from_str(&text)?;
        Ok(simplify_response(&response))
    }
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn simplify_item(item: &Value) -> ItemOutcome {
    if let Some(error) = text_field(item, "error") {
        return ItemOutcome {
            status: "error".to_string(),
            message: error,
        };
    }

    ItemOutcome {
        status: text_field(item, "status").unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        message: text_field(item, "message").unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
    }
}

pub fn simplify_response(response: &Value) -> SubmissionResult {
    let results = response
        .get("results")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(simplify_item).collect())
        .unwrap_or_default();

    SubmissionResult {
        status: text_field(response, "status").unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        message: text_field(response, "message").unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
        execution_time: text_field(response, "execution_time")
            .unwrap_or_else(|| DEFAULT_EXECUTION_TIME.to_string()),
        results,
    }
}
