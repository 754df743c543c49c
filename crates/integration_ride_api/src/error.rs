//! Ride backend error types

use thiserror::Error;

use crate::models::ApiErrorBody;

/// Errors that can occur talking to the ride backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RideApiError {
    /// The request never reached the backend
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The backend did not answer in time
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The backend answered with a non-success status
    #[error("HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Parsed error body; empty if the body was not JSON
        body: ApiErrorBody,
    },

    /// Failed to parse a success response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Client configuration is unusable
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl RideApiError {
    /// Returns true if no response was received
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout { .. })
    }

    /// HTTP status of the response, if one was received
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
