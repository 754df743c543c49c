//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geocoding_adapter;
mod navigation_adapter;
mod notification_adapter;
mod ride_api_adapter;

pub use geocoding_adapter::GeocodingAddressResolver;
pub use navigation_adapter::WatchNavigator;
pub use notification_adapter::{ChannelNotifier, TracingNotifier};
pub use ride_api_adapter::RideApiAdapter;
