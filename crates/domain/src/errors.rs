//! Domain-level errors

use thiserror::Error;

use crate::{entities::InputField, value_objects::DriverId};

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// One or more required rider fields are blank
    #[error("Missing required fields: {}", join_fields(.fields))]
    MissingFields { fields: Vec<InputField> },

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// The offer is not part of the estimate it was selected from
    #[error("Driver offer {offer_id} is not part of the current estimate")]
    OfferNotFound { offer_id: DriverId },
}

impl DomainError {
    /// Create a missing fields error
    pub fn missing_fields(fields: impl Into<Vec<InputField>>) -> Self {
        Self::MissingFields {
            fields: fields.into(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_lists_every_field() {
        let err = DomainError::missing_fields([InputField::RiderId, InputField::Destination]);
        assert_eq!(
            err.to_string(),
            "Missing required fields: rider id, destination"
        );
    }

    #[test]
    fn invalid_coordinates_message() {
        let err = DomainError::InvalidCoordinates {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert_eq!(err.to_string(), "Invalid coordinates: (91, 0)");
    }

    #[test]
    fn offer_not_found_message() {
        let err = DomainError::OfferNotFound {
            offer_id: DriverId::new(7),
        };
        assert_eq!(
            err.to_string(),
            "Driver offer 7 is not part of the current estimate"
        );
    }
}
