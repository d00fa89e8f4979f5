use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::retry::RetryPolicy;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_route, validate_url, Validate,
};
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Parser)]
#[command(name = "shipment-bridge")]
#[command(about = "Forwards shipment CSV exports to the order-management API")]
pub struct ServerConfig {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path that accepts the multipart upload
    #[arg(long, env = "UPLOAD_ROUTE", default_value = "/")]
    pub route: String,

    /// Downstream order API that receives the shipment records
    #[arg(long, env = "SUBMISSION_ENDPOINT")]
    pub submission_endpoint: String,

    #[arg(long, env = "MAX_ATTEMPTS", default_value_t = 3)]
    pub max_attempts: u32,

    /// Attempt n is followed by a pause of n times this value
    #[arg(long, env = "RETRY_DELAY_MS", default_value_t = 1000)]
    pub retry_delay_ms: u64,

    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, env = "LOG_JSON", help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for ServerConfig {
    fn submission_endpoint(&self) -> &str {
        &self.submission_endpoint
    }

    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.retry_delay_ms))
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_route("route", &self.route)?;
        validate_url("submission_endpoint", &self.submission_endpoint)?;
        validate_range("max_attempts", self.max_attempts, 1, 20)?;
        if let Some(timeout) = self.request_timeout_secs {
            validate_range("request_timeout_secs", timeout, 1, 3600)?;
        }

        tracing::debug!("✅ Server configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServerConfig {
        let mut argv = vec!["shipment-bridge"];
        argv.extend_from_slice(args);
        ServerConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[
            "--submission-endpoint",
            "https://orders.test/api/shipments",
            "--port",
            "3000",
            "--route",
            "/",
        ]);

        assert_eq!(config.port, 3000);
        assert_eq!(config.route, "/");
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.retry_policy().delay_for(2), Duration::from_secs(2));
        assert_eq!(config.request_timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = parse(&[
            "--submission-endpoint",
            "https://orders.test/api/shipments",
            "--route",
            "/cannon-hill",
        ]);
        assert!(config.validate().is_ok());

        config.submission_endpoint = "orders.test".to_string();
        assert!(config.validate().is_err());

        config.submission_endpoint = "https://orders.test".to_string();
        config.max_attempts = 0;
        assert!(config.validate().is_err());

        config.max_attempts = 3;
        config.route = "cannon-hill".to_string();
        assert!(config.validate().is_err());
    }
}
