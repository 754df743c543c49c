//! Ride history port
//!
//! Read-only access to a customer's past rides.

use std::fmt;

use async_trait::async_trait;
use domain::{DriverId, RideHistory};
#[cfg(test)]
use mockall::automock;

use super::GatewayError;

/// Which driver's rides to list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DriverFilter {
    /// Rides with any driver
    #[default]
    All,
    /// Rides with one driver only
    Driver(DriverId),
}

impl DriverFilter {
    /// Driver id to filter by, if any
    #[must_use]
    pub const fn driver_id(&self) -> Option<DriverId> {
        match self {
            Self::All => None,
            Self::Driver(id) => Some(*id),
        }
    }
}

impl fmt::Display for DriverFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Driver(id) => write!(f, "{id}"),
        }
    }
}

/// Port for listing past rides
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RideHistoryPort: Send + Sync {
    /// List rides of `customer_id`, optionally restricted to one driver
    async fn list_rides(
        &self,
        customer_id: &str,
        filter: DriverFilter,
    ) -> Result<RideHistory, GatewayError>;
}
