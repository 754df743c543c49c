//! Estimate gateway port
//!
//! Prices and routes a ride for a rider's origin and destination.

use async_trait::async_trait;
use domain::{Estimate, RiderInput};
#[cfg(test)]
use mockall::automock;

use super::GatewayError;

/// Port for requesting ride estimates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EstimateGatewayPort: Send + Sync {
    /// Request an estimate for the given rider and addresses
    ///
    /// Offers in the returned estimate keep backend order.
    async fn estimate(&self, input: &RiderInput) -> Result<Estimate, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn EstimateGatewayPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn EstimateGatewayPort>();
    }
}
