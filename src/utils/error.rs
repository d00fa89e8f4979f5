use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("No file attached.")]
    UploadMissing,

    #[error("Upload could not be read: {message}")]
    UploadError { message: String },

    #[error("CSV processing error: {0}")]
    ParseError(#[from] csv::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Remote submission failed: {message}")]
    RemoteError {
        status: Option<u16>,
        body: Option<String>,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl BridgeError {
    /// HTTP status reported by the downstream API, when the failure came from one.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            BridgeError::RemoteError { status, .. } => *status,
            _ => None,
        }
    }

    /// Raw downstream response body, when one was received.
    pub fn remote_body(&self) -> Option<&str> {
        match self {
            BridgeError::RemoteError { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BridgeError {
    fn from(err: reqwest::Error) -> Self {
        BridgeError::RemoteError {
            status: err.status().map(|s| s.as_u16()),
            body: None,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_accessors() {
        let err = BridgeError::RemoteError {
            status: Some(502),
            body: Some("bad gateway".to_string()),
            message: "HTTP 502".to_string(),
        };
        assert_eq!(err.remote_status(), Some(502));
        assert_eq!(err.remote_body(), Some("bad gateway"));

        let err = BridgeError::ValidationError {
            message: "empty".to_string(),
        };
        assert_eq!(err.remote_status(), None);
        assert_eq!(err.remote_body(), None);
    }

    #[test]
    fn test_upload_missing_message() {
        assert_eq!(BridgeError::UploadMissing.to_string(), "No file attached.");
    }
}
