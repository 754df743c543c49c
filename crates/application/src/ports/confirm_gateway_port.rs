//! Confirm gateway port
//!
//! Commits a ride for a previously estimated route and a chosen driver.

use async_trait::async_trait;
use domain::ConfirmRequest;
#[cfg(test)]
use mockall::automock;

use super::GatewayError;

/// Port for confirming rides
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConfirmGatewayPort: Send + Sync {
    /// Commit the ride described by `request`
    async fn confirm(&self, request: &ConfirmRequest) -> Result<(), GatewayError>;
}
