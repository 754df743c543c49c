//! Property-based tests for domain entities
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    ConfirmRequest, Coordinate, DomainError, DriverId, DriverOffer, Estimate, InputField,
    RiderInput, build_overlay,
};
use proptest::prelude::*;

fn blank() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n')], 0..4)
        .prop_map(|chars| chars.into_iter().collect())
}

fn filled() -> impl Strategy<Value = String> {
    "[ ]{0,2}[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}"
}

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0f64, -180.0f64..=180.0f64)
        .prop_map(|(lat, lon)| Coordinate::new_unchecked(lat, lon))
}

// ============================================================================
// RiderInput Property Tests
// ============================================================================

mod rider_input_tests {
    use super::*;

    proptest! {
        #[test]
        fn blank_field_always_fails_validation(
            rider_id in prop_oneof![blank(), filled()],
            origin in prop_oneof![blank(), filled()],
            destination in prop_oneof![blank(), filled()],
        ) {
            let input = RiderInput::new(rider_id, origin, destination);
            let any_blank = InputField::ALL
                .iter()
                .any(|f| input.field(*f).trim().is_empty());

            match input.validate() {
                Ok(()) => prop_assert!(!any_blank),
                Err(DomainError::MissingFields { fields }) => {
                    prop_assert!(any_blank);
                    prop_assert_eq!(fields, input.missing_fields());
                },
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }

        #[test]
        fn filled_fields_always_validate(
            rider_id in filled(),
            origin in filled(),
            destination in filled(),
        ) {
            prop_assert!(RiderInput::new(rider_id, origin, destination).validate().is_ok());
        }
    }
}

// ============================================================================
// MapOverlay Property Tests
// ============================================================================

mod map_overlay_tests {
    use super::*;

    proptest! {
        #[test]
        fn overlay_coordinates_are_exact(origin in coordinate(), destination in coordinate()) {
            let overlay = build_overlay(origin, destination);
            prop_assert_eq!(overlay.origin_coordinate(), origin);
            prop_assert_eq!(overlay.destination_coordinate(), destination);
            prop_assert_eq!(
                overlay.origin_coordinate().latitude().to_bits(),
                origin.latitude().to_bits()
            );
        }

        #[test]
        fn overlay_is_deterministic(origin in coordinate(), destination in coordinate()) {
            prop_assert_eq!(build_overlay(origin, destination), build_overlay(origin, destination));
        }
    }
}

// ============================================================================
// ConfirmRequest Property Tests
// ============================================================================

mod confirm_request_tests {
    use super::*;

    fn estimate_with_ids(ids: &[u64]) -> Estimate {
        Estimate {
            origin: Coordinate::new_unchecked(0.0, 0.0),
            destination: Coordinate::new_unchecked(1.0, 1.0),
            distance_meters: 1000,
            duration: "120s".to_string(),
            offers: ids
                .iter()
                .map(|id| DriverOffer {
                    id: DriverId::new(*id),
                    name: format!("driver-{id}"),
                    description: String::new(),
                    vehicle: String::new(),
                    rating: 3.0,
                    rating_comment: String::new(),
                    price: format!("{id}.00"),
                })
                .collect(),
        }
    }

    proptest! {
        #[test]
        fn selection_succeeds_only_for_listed_offers(
            ids in prop::collection::btree_set(0u64..50, 0..6),
            pick in 0u64..60,
        ) {
            let ids: Vec<u64> = ids.into_iter().collect();
            let estimate = estimate_with_ids(&ids);
            let input = RiderInput::new("u1", "A St", "B Ave");
            let result = ConfirmRequest::from_selection(&input, &estimate, DriverId::new(pick));

            if ids.contains(&pick) {
                let request = result.unwrap();
                prop_assert_eq!(request.driver_id, DriverId::new(pick));
                prop_assert_eq!(request.price, format!("{pick}.00"));
            } else {
                let is_offer_not_found = matches!(result, Err(DomainError::OfferNotFound { .. }));
                prop_assert!(is_offer_not_found);
            }
        }
    }
}
