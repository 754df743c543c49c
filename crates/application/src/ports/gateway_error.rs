//! Failure contract shared by every backend-facing port
//!
//! Gateways report *what happened* on the wire; turning that into a
//! user-facing outcome is done by [`ApplicationError::classify`].
//!
//! [`ApplicationError::classify`]: crate::error::ApplicationError::classify

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body fields observed on backend failure responses
///
/// The backend is inconsistent about which fields it sets: validation
/// failures carry `error`/`error_message`, lookups carry
/// `error_description` or `message`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Machine-readable error code (e.g. `INVALID_DATA`)
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable validation message
    #[serde(default)]
    pub error_message: Option<String>,
    /// Human-readable lookup failure description
    #[serde(default)]
    pub error_description: Option<String>,
    /// Generic message
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorPayload {
    /// Message to show for a not-found failure
    #[must_use]
    pub fn not_found_message(&self) -> Option<&str> {
        first_present([
            &self.error_description,
            &self.message,
            &self.error_message,
            &self.error,
        ])
    }

    /// Message to show for a rejected request
    #[must_use]
    pub fn rejection_message(&self) -> Option<&str> {
        first_present([&self.error_message, &self.error_description, &self.message])
    }

    /// Error code, used as the secondary detail line
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        first_present([&self.error])
    }

    /// Whether no field carries any text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.not_found_message().is_none()
    }
}

fn first_present<const N: usize>(fields: [&Option<String>; N]) -> Option<&str> {
    fields
        .into_iter()
        .filter_map(Option::as_deref)
        .map(str::trim)
        .find(|s| !s.is_empty())
}

#[allow(clippy::ref_option)]
fn display_status(status: &Option<u16>) -> String {
    status.map_or_else(|| "unknown".to_string(), |s| s.to_string())
}

/// What went wrong talking to the ride backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never produced a response (connect failure, timeout)
    #[error("No response from ride service: {message}")]
    Unreachable {
        /// Transport-level description
        message: String,
        /// Whether the request ran into the client timeout
        timed_out: bool,
    },

    /// The service answered with a non-success status
    #[error("Ride service rejected the request (status {})", display_status(.status))]
    Rejected {
        /// HTTP status, if one could be determined
        status: Option<u16>,
        /// Parsed error body (empty if the body was not JSON)
        payload: ErrorPayload,
    },

    /// The service answered successfully but the body was not understood
    #[error("Malformed response from ride service: {0}")]
    Malformed(String),
}

impl GatewayError {
    /// Create a rejection with a known status
    pub fn rejected(status: u16, payload: ErrorPayload) -> Self {
        Self::Rejected {
            status: Some(status),
            payload,
        }
    }

    /// Create an unreachable error
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
            timed_out: false,
        }
    }
}
