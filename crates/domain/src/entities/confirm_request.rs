//! Ride confirmation request, built from an estimate and a chosen offer

use serde::{Deserialize, Serialize};

use crate::{
    entities::{Estimate, RiderInput},
    errors::DomainError,
    value_objects::DriverId,
};

/// Everything the backend needs to commit a ride
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRequest {
    /// Rider (customer) identifier
    pub rider_id: String,
    /// Origin text as submitted with the estimate
    pub origin: String,
    /// Destination text as submitted with the estimate
    pub destination: String,
    /// Route distance in meters
    pub distance_meters: u64,
    /// Route duration as reported by the backend
    pub duration: String,
    /// Chosen driver
    pub driver_id: DriverId,
    /// Chosen driver's name
    pub driver_name: String,
    /// Price of the chosen offer as a decimal string
    pub price: String,
}

impl ConfirmRequest {
    /// Merge the input that produced `estimate` with the offer identified by `offer_id`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OfferNotFound` if `estimate` has no such offer.
    pub fn from_selection(
        input: &RiderInput,
        estimate: &Estimate,
        offer_id: DriverId,
    ) -> Result<Self, DomainError> {
        let offer = estimate
            .find_offer(offer_id)
            .ok_or(DomainError::OfferNotFound { offer_id })?;

        Ok(Self {
            rider_id: input.rider_id.clone(),
            origin: input.origin.clone(),
            destination: input.destination.clone(),
            distance_meters: estimate.distance_meters,
            duration: estimate.duration.clone(),
            driver_id: offer.id,
            driver_name: offer.name.clone(),
            price: offer.price.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::DriverOffer, value_objects::Coordinate};

    fn estimate() -> Estimate {
        Estimate {
            origin: Coordinate::new_unchecked(-23.56, -46.65),
            destination: Coordinate::new_unchecked(-23.59, -46.68),
            distance_meters: 5000,
            duration: "600s".to_string(),
            offers: vec![DriverOffer {
                id: DriverId::new(1),
                name: "Ana".to_string(),
                description: "Friendly".to_string(),
                vehicle: "Sedan".to_string(),
                rating: 4.5,
                rating_comment: "Great".to_string(),
                price: "20.00".to_string(),
            }],
        }
    }

    #[test]
    fn merges_input_estimate_and_offer() {
        let input = RiderInput::new("u1", "A St", "B Ave");
        let request = ConfirmRequest::from_selection(&input, &estimate(), DriverId::new(1))
            .expect("offer exists");

        assert_eq!(
            request,
            ConfirmRequest {
                rider_id: "u1".to_string(),
                origin: "A St".to_string(),
                destination: "B Ave".to_string(),
                distance_meters: 5000,
                duration: "600s".to_string(),
                driver_id: DriverId::new(1),
                driver_name: "Ana".to_string(),
                price: "20.00".to_string(),
            }
        );
    }

    #[test]
    fn unknown_offer_is_rejected() {
        let input = RiderInput::new("u1", "A St", "B Ave");
        let err = ConfirmRequest::from_selection(&input, &estimate(), DriverId::new(9))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::OfferNotFound {
                offer_id: DriverId::new(9)
            }
        );
    }
}
