//! Ride API adapter - Implements the estimate, confirm and ride history ports
//! using integration_ride_api

use std::sync::Arc;

use application::ports::{
    ConfirmGatewayPort, DriverFilter, ErrorPayload, EstimateGatewayPort, GatewayError,
    RideHistoryPort,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    ConfirmRequest, Coordinate, DriverId, DriverOffer, Estimate, Ride, RideDriver, RideHistory,
    RiderInput,
};
use integration_ride_api::{
    ApiErrorBody, ConfirmRideRequest, DriverOption, DriverRef, EstimateRequest, EstimateResponse,
    HttpRideApiClient, LatLng, RideApiClient, RideApiConfig, RideApiError, RideHistoryResponse,
    RideRecord,
};
use tracing::{debug, instrument};

/// Adapter for the ride backend
#[derive(Clone)]
pub struct RideApiAdapter {
    client: Arc<dyn RideApiClient>,
}

impl std::fmt::Debug for RideApiAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RideApiAdapter")
            .field("client", &"RideApiClient")
            .finish()
    }
}

impl RideApiAdapter {
    /// Create an adapter over an existing client
    #[must_use]
    pub fn new(client: Arc<dyn RideApiClient>) -> Self {
        Self { client }
    }

    /// Create an adapter with an HTTP client built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn from_config(config: &RideApiConfig) -> Result<Self, RideApiError> {
        let client = HttpRideApiClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Map integration error to gateway error
    fn map_error(err: RideApiError) -> GatewayError {
        match err {
            RideApiError::Status { status, body } => {
                GatewayError::rejected(status, Self::map_payload(body))
            },
            RideApiError::Timeout { timeout_secs } => GatewayError::Unreachable {
                message: format!("timed out after {timeout_secs}s"),
                timed_out: true,
            },
            RideApiError::ConnectionFailed(e) => GatewayError::unreachable(e),
            // A local misconfiguration is not a network fault
            RideApiError::ConfigurationError(e) | RideApiError::ParseError(e) => {
                GatewayError::Malformed(e)
            },
        }
    }

    fn map_payload(body: ApiErrorBody) -> ErrorPayload {
        ErrorPayload {
            error: body.error,
            error_message: body.error_message,
            error_description: body.error_description,
            message: body.message,
        }
    }

    fn map_coordinate(point: LatLng) -> Result<Coordinate, GatewayError> {
        Coordinate::new(point.latitude, point.longitude)
            .map_err(|e| GatewayError::Malformed(e.to_string()))
    }

    fn map_offer(option: DriverOption) -> DriverOffer {
        DriverOffer {
            id: DriverId::new(option.id),
            name: option.name,
            description: option.description,
            vehicle: option.vehicle,
            rating: option.review.rating,
            rating_comment: option.review.comment,
            price: option.value,
        }
    }

    fn map_estimate(response: EstimateResponse) -> Result<Estimate, GatewayError> {
        Ok(Estimate {
            origin: Self::map_coordinate(response.origin)?,
            destination: Self::map_coordinate(response.destination)?,
            distance_meters: response.distance,
            duration: response.duration,
            offers: response.options.into_iter().map(Self::map_offer).collect(),
        })
    }

    fn map_confirm(request: &ConfirmRequest) -> ConfirmRideRequest {
        ConfirmRideRequest {
            customer_id: request.rider_id.clone(),
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            distance: request.distance_meters,
            duration: request.duration.clone(),
            driver: DriverRef {
                id: request.driver_id.get(),
                name: request.driver_name.clone(),
            },
            value: request.price.clone(),
        }
    }

    fn map_ride(record: RideRecord) -> Result<Ride, GatewayError> {
        let date = DateTime::parse_from_rfc3339(&record.date)
            .map_err(|e| GatewayError::Malformed(format!("ride {} date: {e}", record.id)))?
            .with_timezone(&Utc);

        Ok(Ride {
            id: record.id,
            date,
            origin: record.origin,
            destination: record.destination,
            distance_meters: record.distance,
            duration: record.duration,
            driver: RideDriver {
                id: record.driver.id,
                name: record.driver.name,
            },
            value: record.value,
        })
    }

    fn map_history(response: RideHistoryResponse) -> Result<RideHistory, GatewayError> {
        let rides = response
            .rides
            .into_iter()
            .map(Self::map_ride)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RideHistory {
            customer_id: response.customer_id,
            rides,
        })
    }
}

#[async_trait]
impl EstimateGatewayPort for RideApiAdapter {
    #[instrument(skip(self, input), fields(rider_id = %input.rider_id))]
    async fn estimate(&self, input: &RiderInput) -> Result<Estimate, GatewayError> {
        let request = EstimateRequest::new(&input.rider_id, &input.origin, &input.destination);
        let response = self
            .client
            .estimate(&request)
            .await
            .map_err(Self::map_error)?;

        let estimate = Self::map_estimate(response)?;
        debug!(offers = estimate.offers.len(), "Mapped ride estimate");
        Ok(estimate)
    }
}

#[async_trait]
impl ConfirmGatewayPort for RideApiAdapter {
    #[instrument(skip(self, request), fields(rider_id = %request.rider_id, driver_id = %request.driver_id))]
    async fn confirm(&self, request: &ConfirmRequest) -> Result<(), GatewayError> {
        self.client
            .confirm(&Self::map_confirm(request))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl RideHistoryPort for RideApiAdapter {
    #[instrument(skip(self), fields(%filter))]
    async fn list_rides(
        &self,
        customer_id: &str,
        filter: DriverFilter,
    ) -> Result<RideHistory, GatewayError> {
        let driver_id = filter.driver_id().map(DriverId::get);
        let response = self
            .client
            .ride_history(customer_id, driver_id)
            .await
            .map_err(Self::map_error)?;

        Self::map_history(response)
    }
}

#[cfg(test)]
mod tests {
    use integration_ride_api::{Review, RideDriverRecord};

    use super::*;

    fn lat_lng(latitude: f64, longitude: f64) -> LatLng {
        LatLng {
            latitude,
            longitude,
        }
    }

    #[test]
    fn status_error_becomes_rejection_with_payload() {
        let err = RideApiAdapter::map_error(RideApiError::Status {
            status: 400,
            body: ApiErrorBody {
                error: Some("INVALID_DATA".to_string()),
                error_message: Some("Origin and destination must differ".to_string()),
                ..Default::default()
            },
        });

        let GatewayError::Rejected { status, payload } = err else {
            panic!("expected rejection, got {err:?}");
        };
        assert_eq!(status, Some(400));
        assert_eq!(payload.code(), Some("INVALID_DATA"));
        assert_eq!(
            payload.rejection_message(),
            Some("Origin and destination must differ")
        );
    }

    #[test]
    fn timeout_is_unreachable_and_flagged() {
        let err = RideApiAdapter::map_error(RideApiError::Timeout { timeout_secs: 10 });
        assert!(matches!(
            err,
            GatewayError::Unreachable {
                timed_out: true,
                ..
            }
        ));
    }

    #[test]
    fn connection_failure_is_unreachable() {
        let err = RideApiAdapter::map_error(RideApiError::ConnectionFailed("refused".into()));
        assert_eq!(err, GatewayError::unreachable("refused"));
    }

    #[test]
    fn parse_error_is_malformed() {
        let err = RideApiAdapter::map_error(RideApiError::ParseError("bad json".into()));
        assert_eq!(err, GatewayError::Malformed("bad json".into()));
    }

    #[test]
    fn configuration_error_is_unexpected_not_network() {
        let err = RideApiAdapter::map_error(RideApiError::ConfigurationError(
            "builder error: invalid URL".into(),
        ));
        assert_eq!(err, GatewayError::Malformed("builder error: invalid URL".into()));
        assert_eq!(
            application::ApplicationError::classify(&err).kind(),
            application::ErrorKind::Unexpected
        );
    }

    #[test]
    fn estimate_mapping_keeps_offer_order() {
        let response = EstimateResponse {
            origin: lat_lng(-23.56, -46.65),
            destination: lat_lng(-23.58, -46.66),
            distance: 5000,
            duration: "600s".to_string(),
            options: vec![
                DriverOption {
                    id: 2,
                    name: "Dom".to_string(),
                    description: "Fast".to_string(),
                    vehicle: "Charger".to_string(),
                    review: Review {
                        rating: 4.0,
                        comment: "Great".to_string(),
                    },
                    value: "25.00".to_string(),
                },
                DriverOption {
                    id: 1,
                    name: "Homer".to_string(),
                    description: String::new(),
                    vehicle: String::new(),
                    review: Review::default(),
                    value: "12.50".to_string(),
                },
            ],
        };

        let estimate = RideApiAdapter::map_estimate(response).unwrap();
        assert_eq!(estimate.origin, Coordinate::new_unchecked(-23.56, -46.65));
        assert_eq!(estimate.distance_meters, 5000);
        let ids: Vec<_> = estimate.offers.iter().map(|o| o.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(estimate.offers[0].rating_comment, "Great");
        assert_eq!(estimate.offers[1].price, "12.50");
    }

    #[test]
    fn estimate_with_invalid_coordinate_is_malformed() {
        let response = EstimateResponse {
            origin: lat_lng(123.0, 0.0),
            destination: lat_lng(0.0, 0.0),
            distance: 1,
            duration: "1s".to_string(),
            options: Vec::new(),
        };
        assert!(matches!(
            RideApiAdapter::map_estimate(response),
            Err(GatewayError::Malformed(_))
        ));
    }

    #[test]
    fn confirm_mapping_carries_every_field() {
        let request = ConfirmRequest {
            rider_id: "u1".to_string(),
            origin: "A St".to_string(),
            destination: "B Ave".to_string(),
            distance_meters: 5000,
            duration: "600s".to_string(),
            driver_id: DriverId::new(1),
            driver_name: "Ana".to_string(),
            price: "20.00".to_string(),
        };

        let wire = RideApiAdapter::map_confirm(&request);
        assert_eq!(wire.customer_id, "u1");
        assert_eq!(wire.distance, 5000);
        assert_eq!(wire.driver, DriverRef {
            id: 1,
            name: "Ana".to_string()
        });
        assert_eq!(wire.value, "20.00");
    }

    #[test]
    fn ride_with_bad_date_is_malformed() {
        let record = RideRecord {
            id: "1".to_string(),
            date: "yesterday".to_string(),
            origin: "A".to_string(),
            destination: "B".to_string(),
            distance: 1.0,
            duration: "1s".to_string(),
            driver: RideDriverRecord {
                id: "2".to_string(),
                name: "Ana".to_string(),
            },
            value: 1.0,
        };
        assert!(matches!(
            RideApiAdapter::map_ride(record),
            Err(GatewayError::Malformed(_))
        ));
    }
}
