//! Resolved place produced by address autocomplete

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// An address that autocomplete mapped to a point on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    /// Canonical address text offered by the resolver
    pub formatted_address: String,
    /// Geocoded position
    pub location: Coordinate,
}

impl ResolvedPlace {
    /// Create a resolved place
    pub fn new(formatted_address: impl Into<String>, location: Coordinate) -> Self {
        Self {
            formatted_address: formatted_address.into(),
            location,
        }
    }
}
