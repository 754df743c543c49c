//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod address_resolver_port;
mod confirm_gateway_port;
mod estimate_gateway_port;
mod gateway_error;
mod navigator_port;
mod notification_port;
mod ride_history_port;

#[cfg(test)]
pub use address_resolver_port::MockAddressResolverPort;
pub use address_resolver_port::{AddressResolverPort, PlaceCandidate};
#[cfg(test)]
pub use confirm_gateway_port::MockConfirmGatewayPort;
pub use confirm_gateway_port::ConfirmGatewayPort;
#[cfg(test)]
pub use estimate_gateway_port::MockEstimateGatewayPort;
pub use estimate_gateway_port::EstimateGatewayPort;
pub use gateway_error::{ErrorPayload, GatewayError};
#[cfg(test)]
pub use navigator_port::MockNavigatorPort;
pub use navigator_port::{NavigatorPort, Route};
#[cfg(test)]
pub use notification_port::MockNotificationPort;
pub use notification_port::{Notification, NotificationLevel, NotificationPort};
#[cfg(test)]
pub use ride_history_port::MockRideHistoryPort;
pub use ride_history_port::{DriverFilter, RideHistoryPort};
