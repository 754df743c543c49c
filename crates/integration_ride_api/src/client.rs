//! Ride backend HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    config::RideApiConfig,
    error::RideApiError,
    models::{
        ApiErrorBody, ConfirmRideRequest, EstimateRequest, EstimateResponse, RideHistoryResponse,
    },
};

/// Header carrying a fresh UUID on every request
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Trait for ride backend clients
#[async_trait]
pub trait RideApiClient: Send + Sync {
    /// Price and route a ride
    async fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResponse, RideApiError>;

    /// Book a ride with the selected driver
    async fn confirm(&self, request: &ConfirmRideRequest) -> Result<(), RideApiError>;

    /// List past rides of a customer, optionally for one driver only
    async fn ride_history(
        &self,
        customer_id: &str,
        driver_id: Option<u64>,
    ) -> Result<RideHistoryResponse, RideApiError>;
}

/// reqwest-based ride backend client
#[derive(Debug)]
pub struct HttpRideApiClient {
    client: Client,
    base_url: Url,
    timeout_secs: u64,
}

impl HttpRideApiClient {
    /// Create a new ride backend client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &RideApiConfig) -> Result<Self, RideApiError> {
        config.validate().map_err(RideApiError::ConfigurationError)?;

        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| RideApiError::ConfigurationError(format!("Invalid base_url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(RideApiError::ConfigurationError(
                "base_url cannot be used as a base".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| RideApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Build an endpoint URL below the base URL, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Start a request with a fresh request id
    fn request(&self, method: Method, url: Url) -> (RequestBuilder, String) {
        let request_id = Uuid::new_v4().to_string();
        let builder = self
            .client
            .request(method, url)
            .header(REQUEST_ID_HEADER, &request_id);
        (builder, request_id)
    }

    /// Send a request and turn non-success statuses into errors
    async fn send(&self, builder: RequestBuilder) -> Result<Response, RideApiError> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                RideApiError::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                RideApiError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), %body, "Ride backend returned an error");
        Err(RideApiError::Status {
            status: status.as_u16(),
            body: ApiErrorBody::parse(&body),
        })
    }

    /// Read and parse a JSON success body
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, RideApiError> {
        let body = response
            .text()
            .await
            .map_err(|e| RideApiError::ParseError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| RideApiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl RideApiClient for HttpRideApiClient {
    #[instrument(skip(self, request), fields(customer_id = %request.customer_id))]
    async fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResponse, RideApiError> {
        let url = self.endpoint(&["ride", "estimate"]);
        let (builder, request_id) = self.request(Method::POST, url);
        debug!(%request_id, "Requesting ride estimate");

        let response = self.send(builder.json(request)).await?;
        let estimate: EstimateResponse = Self::parse(response).await?;

        debug!(
            %request_id,
            options = estimate.options.len(),
            distance = estimate.distance,
            "Ride estimate received"
        );
        Ok(estimate)
    }

    #[instrument(skip(self, request), fields(customer_id = %request.customer_id, driver_id = request.driver.id))]
    async fn confirm(&self, request: &ConfirmRideRequest) -> Result<(), RideApiError> {
        let url = self.endpoint(&["ride", "confirm"]);
        let (builder, request_id) = self.request(Method::PATCH, url);
        debug!(%request_id, "Confirming ride");

        self.send(builder.json(request)).await?;

        debug!(%request_id, "Ride confirmed");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn ride_history(
        &self,
        customer_id: &str,
        driver_id: Option<u64>,
    ) -> Result<RideHistoryResponse, RideApiError> {
        let url = self.endpoint(&["ride", customer_id]);
        let (mut builder, request_id) = self.request(Method::GET, url);
        if let Some(driver_id) = driver_id {
            builder = builder.query(&[("driver_id", driver_id)]);
        }
        debug!(%request_id, "Fetching ride history");

        let response = self.send(builder).await?;
        let history: RideHistoryResponse = Self::parse(response).await?;

        debug!(%request_id, rides = history.rides.len(), "Ride history received");
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> HttpRideApiClient {
        HttpRideApiClient::new(&RideApiConfig::for_testing(base_url)).unwrap()
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let client = client("http://localhost:8080");
        assert_eq!(
            client.endpoint(&["ride", "estimate"]).as_str(),
            "http://localhost:8080/ride/estimate"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client("https://api.example.com/v1/");
        assert_eq!(
            client.endpoint(&["ride", "confirm"]).as_str(),
            "https://api.example.com/v1/ride/confirm"
        );
    }

    #[test]
    fn test_endpoint_encodes_customer_id() {
        let client = client("http://localhost:8080");
        assert_eq!(
            client.endpoint(&["ride", "a b/c"]).as_str(),
            "http://localhost:8080/ride/a%20b%2Fc"
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RideApiConfig {
            timeout_secs: 0,
            ..RideApiConfig::default()
        };
        assert!(matches!(
            HttpRideApiClient::new(&config),
            Err(RideApiError::ConfigurationError(_))
        ));
    }
}
