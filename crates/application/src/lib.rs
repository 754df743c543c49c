//! Application layer - Use cases and orchestration
//!
//! Contains the ride workflow, the ports it talks to and the error taxonomy
//! that backend failures are classified into. Adapters in the
//! infrastructure layer implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, ErrorKind};
pub use ports::*;
pub use services::*;
