//! Domain entities - Rider input, estimates, offers and rides

mod confirm_request;
mod estimate;
mod map_overlay;
mod place;
mod ride;
mod rider_input;

pub use confirm_request::ConfirmRequest;
pub use estimate::{DriverOffer, Estimate, duration_secs};
pub use map_overlay::{
    DESTINATION_MARKER, MapOverlay, Marker, MarkerStyle, ORIGIN_MARKER, PATH_COLOR, PATH_WEIGHT,
    RoutePath, build_overlay,
};
pub use place::ResolvedPlace;
pub use ride::{Ride, RideDriver, RideHistory, format_distance, format_duration};
pub use rider_input::{InputField, RiderInput};
