//! Ride estimate entity and the driver offers it carries

use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinate, DriverId};

/// One selectable driver option within an estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverOffer {
    /// Driver identifier
    pub id: DriverId,
    /// Driver display name
    pub name: String,
    /// Free-form driver description
    pub description: String,
    /// Vehicle description
    pub vehicle: String,
    /// Review rating (0 to 5)
    pub rating: f64,
    /// Review comment
    pub rating_comment: String,
    /// Ride price as a decimal string, passed through untouched
    pub price: String,
}

/// Priced, routed result of one estimate request
///
/// Offers keep the order the backend returned them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Geocoded origin
    pub origin: Coordinate,
    /// Geocoded destination
    pub destination: Coordinate,
    /// Route distance in meters
    pub distance_meters: u64,
    /// Route duration as reported by the backend (e.g. `"600s"`)
    pub duration: String,
    /// Driver offers in backend order
    pub offers: Vec<DriverOffer>,
}

impl Estimate {
    /// Look up an offer by driver id
    #[must_use]
    pub fn find_offer(&self, id: DriverId) -> Option<&DriverOffer> {
        self.offers.iter().find(|offer| offer.id == id)
    }

    /// Whether the estimate has at least one selectable offer
    #[must_use]
    pub fn has_offers(&self) -> bool {
        !self.offers.is_empty()
    }

    /// Route duration in whole seconds, if the duration string is parseable
    #[must_use]
    pub fn duration_secs(&self) -> Option<u64> {
        duration_secs(&self.duration)
    }
}

/// Parse the leading whole-second count of a duration string like `"600s"`
///
/// Fractional seconds are truncated. Returns `None` when the string does not
/// start with a digit.
#[must_use]
pub fn duration_secs(duration: &str) -> Option<u64> {
    let trimmed = duration.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}
