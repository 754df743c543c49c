//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod driver_id;

pub use coordinate::Coordinate;
pub use driver_id::DriverId;
