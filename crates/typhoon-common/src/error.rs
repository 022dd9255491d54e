//! Error types for the typhoon risk crates.
//!
//! The core lookups and the claim simulation never fail: they answer with
//! sentinels. These errors cover the edges that touch the outside world:
//! configuration files, grid files and the tracker API.

use thiserror::Error;

/// Result type alias using RiskError.
pub type RiskResult<T> = Result<T, RiskError>;

/// Primary error type for the fallible edges of the workspace.
#[derive(Debug, Error)]
pub enum RiskError {
    // === Input Errors ===
    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // === Data Errors ===
    #[error("Failed to read data: {0}")]
    DataReadError(String),

    // === Tracker API Errors ===
    #[error("Tracker request failed: {0}")]
    TrackerRequest(String),

    #[error("Tracker returned HTTP {status}: {body}")]
    TrackerStatus { status: u16, body: String },

    #[error("Request timeout")]
    Timeout,
}

impl RiskError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether retrying the same request could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            RiskError::Timeout | RiskError::TrackerRequest(_) => true,
            RiskError::TrackerStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for RiskError {
    fn from(err: std::io::Error) -> Self {
        RiskError::DataReadError(err.to_string())
    }
}

impl From<serde_json::Error> for RiskError {
    fn from(err: serde_json::Error) -> Self {
        RiskError::DataReadError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for RiskError {
    fn from(err: serde_yaml::Error) -> Self {
        RiskError::InvalidConfig(format!("YAML error: {}", err))
    }
}

impl From<reqwest::Error> for RiskError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RiskError::Timeout
        } else if let Some(status) = err.status() {
            RiskError::TrackerStatus {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            RiskError::TrackerRequest(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(RiskError::Timeout.is_transient());
        assert!(RiskError::TrackerStatus {
            status: 503,
            body: String::new()
        }
        .is_transient());
        assert!(!RiskError::TrackerStatus {
            status: 404,
            body: String::new()
        }
        .is_transient());
        assert!(!RiskError::invalid_config("bad").is_transient());
    }

    #[test]
    fn test_io_error_maps_to_data_read() {
        let err: RiskError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, RiskError::DataReadError(_)));
    }
}
