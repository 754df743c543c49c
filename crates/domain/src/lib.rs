//! Domain layer for RideFlow
//!
//! Contains the rider input, estimate and confirmation entities, the value
//! objects they are built from, and the pure map overlay derivation.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
