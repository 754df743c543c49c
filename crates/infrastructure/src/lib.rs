//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the ride backend and geocoding adapters, notification and
//! navigation adapters, static map rendering, configuration loading and
//! telemetry, plus the wiring that ties them together.

pub mod adapters;
pub mod app;
pub mod config;
pub mod maps;
pub mod telemetry;

pub use adapters::*;
pub use app::{BootstrapError, RideFlowApp};
pub use config::{AppConfig, ConfigError, Environment, MapsConfig};
pub use maps::{StaticMapError, StaticMapRenderer};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
