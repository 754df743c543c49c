//! Ride history entities (read-only)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::estimate::duration_secs;

/// Driver summary attached to a past ride
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideDriver {
    /// Driver identifier as reported by the history endpoint
    pub id: String,
    /// Driver display name
    pub name: String,
}

/// A confirmed ride
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    /// Ride identifier
    pub id: String,
    /// When the ride was confirmed
    pub date: DateTime<Utc>,
    /// Origin address text
    pub origin: String,
    /// Destination address text
    pub destination: String,
    /// Distance in meters
    pub distance_meters: f64,
    /// Duration as reported by the backend (e.g. `"600s"`)
    pub duration: String,
    /// Driver who took the ride
    pub driver: RideDriver,
    /// Price paid
    pub value: f64,
}

impl Ride {
    /// Distance formatted for display, e.g. `"5.00 km"`
    #[must_use]
    pub fn display_distance(&self) -> String {
        format_distance(self.distance_meters)
    }

    /// Duration formatted for display, e.g. `"1 hrs 5 mins"`
    #[must_use]
    pub fn display_duration(&self) -> String {
        format_duration(&self.duration)
    }
}

/// Rides of one customer, newest first as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideHistory {
    /// Customer the rides belong to
    pub customer_id: String,
    /// Rides in backend order
    pub rides: Vec<Ride>,
}

/// Format a distance in meters as kilometers with two decimals
#[must_use]
pub fn format_distance(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}

/// Format a `"<seconds>s"` duration as hours and minutes
///
/// The hours part is omitted below one hour. Unparseable input is returned
/// unchanged.
#[must_use]
pub fn format_duration(duration: &str) -> String {
    let Some(secs) = duration_secs(duration) else {
        return duration.to_string();
    };
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{hours} hrs {minutes} mins")
    } else {
        format!("{minutes} mins")
    }
}
