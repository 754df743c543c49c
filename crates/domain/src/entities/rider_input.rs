//! Rider input entity - the three text fields captured from the rider

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// One of the rider-editable input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Rider (customer) identifier
    RiderId,
    /// Pick-up address text
    Origin,
    /// Drop-off address text
    Destination,
}

impl InputField {
    /// All fields in display order
    pub const ALL: [Self; 3] = [Self::RiderId, Self::Origin, Self::Destination];
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RiderId => write!(f, "rider id"),
            Self::Origin => write!(f, "origin"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Text the rider has typed (or accepted from autocomplete)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiderInput {
    /// Rider (customer) identifier
    pub rider_id: String,
    /// Origin address as free text
    pub origin: String,
    /// Destination address as free text
    pub destination: String,
}

impl RiderInput {
    /// Create a new rider input
    pub fn new(
        rider_id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            rider_id: rider_id.into(),
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Get the text of a single field
    #[must_use]
    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::RiderId => &self.rider_id,
            InputField::Origin => &self.origin,
            InputField::Destination => &self.destination,
        }
    }

    /// Replace the text of a single field
    pub fn set_field(&mut self, field: InputField, value: impl Into<String>) {
        let value = value.into();
        match field {
            InputField::RiderId => self.rider_id = value,
            InputField::Origin => self.origin = value,
            InputField::Destination => self.destination = value,
        }
    }

    /// Fields that are empty after trimming, in display order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<InputField> {
        InputField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    /// Check that every field carries text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingFields` naming each blank field.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::missing_fields(missing))
        }
    }

    /// Copy with surrounding whitespace removed from every field
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            rider_id: self.rider_id.trim().to_string(),
            origin: self.origin.trim().to_string(),
            destination: self.destination.trim().to_string(),
        }
    }
}
