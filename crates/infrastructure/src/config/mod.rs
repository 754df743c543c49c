//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `maps`: static map rendering and geocoding
//!
//! The ride backend client and logging bring their own sections
//! ([`RideApiConfig`], [`TelemetryConfig`]).

mod maps;

use std::{fmt, path::Path};

use integration_ride_api::RideApiConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use maps::MapsConfig;

use crate::telemetry::TelemetryConfig;

/// Prefix of environment variable overrides (e.g. `RIDEFLOW_RIDE_API__BASE_URL`)
pub const ENV_PREFIX: &str = "RIDEFLOW";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment - a maps API key is required
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A section holds an unusable value
    #[error("Invalid {section} configuration: {reason}")]
    Invalid {
        /// Offending section
        section: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Ride backend client
    #[serde(default)]
    pub ride_api: RideApiConfig,

    /// Static maps and geocoding
    #[serde(default)]
    pub maps: MapsConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (or `config.*` in the working
    /// directory when `None`), then apply `RIDEFLOW_*` environment overrides
    ///
    /// Nested keys are separated by a double underscore, e.g.
    /// `RIDEFLOW_RIDE_API__BASE_URL`.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("environment", "development")?
            .set_default("ride_api.base_url", RideApiConfig::default().base_url)?
            // Load from file
            .add_source(file)
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            environment = %config.environment,
            ride_api = %config.ride_api.base_url,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ride_api
            .validate()
            .map_err(|reason| ConfigError::Invalid {
                section: "ride_api",
                reason,
            })?;
        self.maps.validate().map_err(|reason| ConfigError::Invalid {
            section: "maps",
            reason,
        })?;
        self.telemetry
            .validate()
            .map_err(|reason| ConfigError::Invalid {
                section: "telemetry",
                reason,
            })?;

        if self.environment == Environment::Production && self.maps.api_key_str().is_none() {
            return Err(ConfigError::Invalid {
                section: "maps",
                reason: "api_key is required in production".to_string(),
            });
        }

        Ok(())
    }
}
