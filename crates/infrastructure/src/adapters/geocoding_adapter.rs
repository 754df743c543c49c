//! Geocoding adapter - Implements AddressResolverPort with the Google
//! Geocoding API
//!
//! Stands in for the browser autocomplete widget: the first result becomes
//! the place candidate. Statuses other than `OK` and `ZERO_RESULTS` are
//! reported as rejections carrying the API's `error_message`.

use std::time::Duration;

use application::ports::{AddressResolverPort, ErrorPayload, GatewayError, PlaceCandidate};
use async_trait::async_trait;
use domain::Coordinate;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::MapsConfig;

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    formatted_address: Option<String>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: GeoPoint,
}

#[derive(Debug, Deserialize)]
struct GeoPoint {
    lat: f64,
    lng: f64,
}

/// Address resolver backed by the Google Geocoding API
pub struct GeocodingAddressResolver {
    client: Client,
    endpoint: String,
    api_key: Option<SecretString>,
    timeout_secs: u64,
}

impl std::fmt::Debug for GeocodingAddressResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAddressResolver")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl GeocodingAddressResolver {
    /// Create a resolver from the maps configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &MapsConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::unreachable(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.geocoding_url.clone(),
            api_key: config.api_key.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn map_transport(&self, err: &reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Unreachable {
                message: format!("geocoding timed out after {}s", self.timeout_secs),
                timed_out: true,
            }
        } else {
            GatewayError::unreachable(err.to_string())
        }
    }

    fn candidate(response: GeocodeResponse) -> Result<Option<PlaceCandidate>, GatewayError> {
        match response.status.as_str() {
            STATUS_OK => {},
            STATUS_ZERO_RESULTS => return Ok(None),
            other => {
                return Err(GatewayError::Rejected {
                    status: None,
                    payload: ErrorPayload {
                        error: Some(other.to_string()),
                        error_message: response.error_message,
                        ..Default::default()
                    },
                });
            },
        }

        let Some(first) = response.results.into_iter().next() else {
            return Ok(None);
        };

        let location = first
            .geometry
            .map(|g| Coordinate::new(g.location.lat, g.location.lng))
            .transpose()
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;

        Ok(Some(PlaceCandidate {
            formatted_address: first.formatted_address,
            location,
        }))
    }
}

#[async_trait]
impl AddressResolverPort for GeocodingAddressResolver {
    #[instrument(skip(self))]
    async fn resolve(&self, text: &str) -> Result<Option<PlaceCandidate>, GatewayError> {
        let mut request = self.client.get(&self.endpoint).query(&[("address", text)]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.expose_secret())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Geocoding request failed");
            return Err(GatewayError::rejected(
                status.as_u16(),
                ErrorPayload::default(),
            ));
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;

        let candidate = Self::candidate(body)?;
        debug!(found = candidate.is_some(), "Geocoding finished");
        Ok(candidate)
    }
}
