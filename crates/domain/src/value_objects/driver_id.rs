//! Driver identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a driver, as assigned by the ride backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(u64);

impl DriverId {
    /// Wrap a raw driver id
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for DriverId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
