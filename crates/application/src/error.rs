//! Application-level errors
//!
//! Every failure the workflow can report falls into one [`ErrorKind`].
//! Local failures (validation, stale selection, invalid state) never leave
//! the workflow; gateway failures are classified from the raw
//! [`GatewayError`] by [`ApplicationError::classify`].

use std::fmt;

use domain::{DomainError, DriverId, InputField};
use thiserror::Error;

use crate::{
    ports::GatewayError,
    services::WorkflowPhase,
};

/// Message for failures where no response reached the backend
pub const NETWORK_MESSAGE: &str = "Could not reach the ride service";

/// Message for failures that fit no other category
pub const UNEXPECTED_MESSAGE: &str = "Unexpected error while processing the request";

/// Message for not-found failures without a usable body
pub const NOT_FOUND_MESSAGE: &str = "Resource not found";

/// Category of an application error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Required rider input is missing
    Validation,
    /// Backend reported an unknown resource
    NotFound,
    /// Backend rejected the request with a structured message
    BadRequest,
    /// No response reached the backend
    Network,
    /// Selected offer is not part of the current estimate
    StaleSelection,
    /// Operation is not allowed in the current workflow phase
    InvalidState,
    /// Anything else
    Unexpected,
}

impl ErrorKind {
    /// Whether errors of this kind come from a gateway call
    #[must_use]
    pub const fn is_gateway_failure(self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::BadRequest | Self::Network | Self::Unexpected
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::BadRequest => "bad_request",
            Self::Network => "network",
            Self::StaleSelection => "stale_selection",
            Self::InvalidState => "invalid_state",
            Self::Unexpected => "unexpected",
        };
        f.write_str(name)
    }
}

/// Errors that can occur in the application layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    /// Required fields are blank; no request was sent
    #[error("Please fill in: {}", join_fields(.fields))]
    Validation {
        /// Offending fields, in display order
        fields: Vec<InputField>,
    },

    /// The selected offer does not belong to the estimate on screen
    #[error("Driver offer {offer_id} is no longer available")]
    StaleSelection {
        /// Offer the rider picked
        offer_id: DriverId,
    },

    /// The operation does not fit the current workflow phase
    #[error("Cannot {operation} while {phase}")]
    InvalidState {
        /// Attempted operation
        operation: &'static str,
        /// Phase the workflow was in
        phase: WorkflowPhase,
    },

    /// The backend does not know the requested resource
    #[error("{message}")]
    NotFound {
        /// Backend message, verbatim
        message: String,
    },

    /// The backend rejected the request
    #[error("{message}")]
    BadRequest {
        /// Backend message, verbatim
        message: String,
        /// Backend error code
        detail: Option<String>,
    },

    /// The backend could not be reached
    #[error("{message}")]
    Network {
        /// User-facing message
        message: String,
        /// Transport description
        detail: Option<String>,
    },

    /// Anything else, including malformed responses
    #[error("{message}")]
    Unexpected {
        /// User-facing message
        message: String,
        /// Whatever the backend said, if anything
        detail: Option<String>,
    },
}

impl ApplicationError {
    /// Map a raw gateway failure onto the error taxonomy
    ///
    /// Checked in priority order: not found (404), bad request (other 4xx
    /// with a message), network (no response), unexpected.
    #[must_use]
    pub fn classify(err: &GatewayError) -> Self {
        match err {
            GatewayError::Rejected {
                status: Some(404),
                payload,
            } => Self::NotFound {
                message: payload
                    .not_found_message()
                    .unwrap_or(NOT_FOUND_MESSAGE)
                    .to_string(),
            },
            GatewayError::Rejected {
                status: Some(status),
                payload,
            } if (400..500).contains(status) && payload.rejection_message().is_some() => {
                Self::BadRequest {
                    message: payload
                        .rejection_message()
                        .unwrap_or_default()
                        .to_string(),
                    detail: payload.code().map(str::to_string),
                }
            },
            GatewayError::Unreachable { message, .. } => Self::Network {
                message: NETWORK_MESSAGE.to_string(),
                detail: Some(message.clone()),
            },
            GatewayError::Rejected { payload, .. } => Self::Unexpected {
                message: UNEXPECTED_MESSAGE.to_string(),
                detail: payload
                    .rejection_message()
                    .or_else(|| payload.code())
                    .map(str::to_string),
            },
            GatewayError::Malformed(reason) => Self::Unexpected {
                message: UNEXPECTED_MESSAGE.to_string(),
                detail: Some(reason.clone()),
            },
        }
    }

    /// Category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::StaleSelection { .. } => ErrorKind::StaleSelection,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::BadRequest { .. } => ErrorKind::BadRequest,
            Self::Network { .. } => ErrorKind::Network,
            Self::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }

    /// Secondary detail line, where one exists
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::BadRequest { detail, .. }
            | Self::Network { detail, .. }
            | Self::Unexpected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingFields { fields } => Self::Validation { fields },
            DomainError::OfferNotFound { offer_id } => Self::StaleSelection { offer_id },
            DomainError::InvalidCoordinates { .. } => Self::Unexpected {
                message: UNEXPECTED_MESSAGE.to_string(),
                detail: Some(err.to_string()),
            },
        }
    }
}

fn join_fields(fields: &[InputField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
