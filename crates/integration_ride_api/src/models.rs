//! Wire models for the ride backend

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /ride/estimate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Rider identifier
    pub customer_id: String,
    /// Origin address text
    pub origin: String,
    /// Destination address text
    pub destination: String,
}

impl EstimateRequest {
    /// Create a new estimate request
    pub fn new(
        customer_id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// A point as the backend reports it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Driver review summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Rating, 1 to 5
    #[serde(default)]
    pub rating: f64,
    /// Review text
    #[serde(default)]
    pub comment: String,
}

/// One driver option of an estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverOption {
    /// Driver identifier
    pub id: u64,
    /// Driver name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Vehicle description
    #[serde(default)]
    pub vehicle: String,
    /// Review summary
    #[serde(default)]
    pub review: Review,
    /// Price, kept as the backend formatted it
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
}

/// Response of `POST /ride/estimate`
///
/// The backend also returns the raw routing response; it is not needed
/// and ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResponse {
    /// Geocoded origin
    pub origin: LatLng,
    /// Geocoded destination
    pub destination: LatLng,
    /// Route distance in meters, rounded to the nearest meter
    #[serde(deserialize_with = "rounded_meters")]
    pub distance: u64,
    /// Route duration, e.g. `"600s"`
    pub duration: String,
    /// Driver options in backend order
    #[serde(default)]
    pub options: Vec<DriverOption>,
}

/// Driver reference inside a confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRef {
    /// Driver identifier
    pub id: u64,
    /// Driver name
    pub name: String,
}

/// Body of `PATCH /ride/confirm`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRideRequest {
    /// Rider identifier
    pub customer_id: String,
    /// Origin address text
    pub origin: String,
    /// Destination address text
    pub destination: String,
    /// Route distance in meters
    pub distance: u64,
    /// Route duration
    pub duration: String,
    /// Selected driver
    pub driver: DriverRef,
    /// Price of the selected option
    pub value: String,
}

/// Driver of a past ride
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideDriverRecord {
    /// Driver identifier; the backend sends either a number or a string
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Driver name
    pub name: String,
}

/// One past ride
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideRecord {
    /// Ride identifier; the backend sends either a number or a string
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Confirmation timestamp (RFC 3339)
    pub date: String,
    /// Origin address text
    pub origin: String,
    /// Destination address text
    pub destination: String,
    /// Distance in meters
    pub distance: f64,
    /// Duration, e.g. `"600s"`
    pub duration: String,
    /// Driver who took the ride
    pub driver: RideDriverRecord,
    /// Price paid
    pub value: f64,
}

/// Response of `GET /ride/{customer_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideHistoryResponse {
    /// Rider identifier
    pub customer_id: String,
    /// Past rides, newest first
    #[serde(default)]
    pub rides: Vec<RideRecord>,
}

/// Error body of a non-success response
///
/// Every field is optional; the backend sets different ones depending on
/// the failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code
    #[serde(default)]
    pub error: Option<String>,
    /// Validation message
    #[serde(default)]
    pub error_message: Option<String>,
    /// Lookup failure description
    #[serde(default)]
    pub error_description: Option<String>,
    /// Generic message
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Parse an error body, falling back to an empty one
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

/// Accepts integral and fractional meters alike
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn rounded_meters<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let meters = f64::deserialize(deserializer)?;
    if !meters.is_finite() || meters < 0.0 || meters >= u64::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "distance out of range: {meters}"
        )));
    }
    Ok(meters.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_response_ignores_route_payload() {
        let json = r#"{
            "origin": {"latitude": -23.561, "longitude": -46.656},
            "destination": {"latitude": -23.588, "longitude": -46.682},
            "distance": 5000,
            "duration": "600s",
            "options": [{
                "id": 1,
                "name": "Homer Simpson",
                "description": "Relax and enjoy the ride",
                "vehicle": "Plymouth Valiant 1973",
                "review": {"rating": 2, "comment": "Motorista simpatico"},
                "value": "20.00"
            }],
            "routeResponse": {"routes": []}
        }"#;

        let response: EstimateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.distance, 5000);
        assert_eq!(response.options.len(), 1);
        assert!((response.options[0].review.rating - 2.0).abs() < f64::EPSILON);
        assert_eq!(response.options[0].value, "20.00");
    }

    #[test]
    fn test_fractional_distance_is_rounded() {
        let response = |distance: &str| {
            serde_json::from_str::<EstimateResponse>(&format!(
                r#"{{
                    "origin": {{"latitude": -23.561, "longitude": -46.656}},
                    "destination": {{"latitude": -23.588, "longitude": -46.682}},
                    "distance": {distance},
                    "duration": "600s"
                }}"#
            ))
        };

        assert_eq!(response("5000.6").unwrap().distance, 5001);
        assert_eq!(response("5000.4").unwrap().distance, 5000);
        assert_eq!(response("5000.0").unwrap().distance, 5000);
        assert!(response("-1.5").is_err());
        assert!(response("\"far\"").is_err());
    }

    #[test]
    fn test_numeric_price_is_kept_as_text() {
        let json = r#"{"id": 2, "name": "Dom", "value": 50.5}"#;
        let option: DriverOption = serde_json::from_str(json).unwrap();
        assert_eq!(option.value, "50.5");
        assert_eq!(option.review, Review::default());
    }

    #[test]
    fn test_ride_ids_accept_numbers_and_strings() {
        let json = r#"{
            "id": 17,
            "date": "2024-03-01T12:30:00Z",
            "origin": "A St",
            "destination": "B Ave",
            "distance": 5000.0,
            "duration": "600s",
            "driver": {"id": "1", "name": "Ana"},
            "value": 20.0
        }"#;
        let ride: RideRecord = serde_json::from_str(json).unwrap();
        assert_eq!(ride.id, "17");
        assert_eq!(ride.driver.id, "1");
    }

    #[test]
    fn test_confirm_request_wire_shape() {
        let request = ConfirmRideRequest {
            customer_id: "u1".to_string(),
            origin: "A St".to_string(),
            destination: "B Ave".to_string(),
            distance: 5000,
            duration: "600s".to_string(),
            driver: DriverRef {
                id: 1,
                name: "Ana".to_string(),
            },
            value: "20.00".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "customer_id": "u1",
                "origin": "A St",
                "destination": "B Ave",
                "distance": 5000,
                "duration": "600s",
                "driver": {"id": 1, "name": "Ana"},
                "value": "20.00"
            })
        );
    }

    #[test]
    fn test_error_body_parse_falls_back_to_empty() {
        assert_eq!(ApiErrorBody::parse("<html>Bad Gateway</html>"), ApiErrorBody::default());
        assert_eq!(
            ApiErrorBody::parse(r#"{"error_description":"driver not found"}"#)
                .error_description
                .as_deref(),
            Some("driver not found")
        );
    }
}
