//! Ride backend integration for RideFlow
//!
//! HTTP client for the ride backend: estimates (`POST /ride/estimate`),
//! confirmations (`PATCH /ride/confirm`) and ride history
//! (`GET /ride/{customer_id}`).
//!
//! # Architecture
//!
//! [`RideApiClient`] defines the interface, implemented by
//! [`HttpRideApiClient`]. The client reports what happened on the wire
//! through [`RideApiError`]; mapping those failures onto user-facing
//! errors is the application layer's job.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_ride_api::{EstimateRequest, HttpRideApiClient, RideApiClient, RideApiConfig};
//!
//! let client = HttpRideApiClient::new(&RideApiConfig::default())?;
//! let estimate = client
//!     .estimate(&EstimateRequest::new("u1", "A St", "B Ave"))
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{HttpRideApiClient, REQUEST_ID_HEADER, RideApiClient};
pub use config::RideApiConfig;
pub use error::RideApiError;
pub use models::{
    ApiErrorBody, ConfirmRideRequest, DriverOption, DriverRef, EstimateRequest,
    EstimateResponse, LatLng, Review, RideDriverRecord, RideHistoryResponse, RideRecord,
};
