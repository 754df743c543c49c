//! Address resolution - optional autocomplete enhancement for address fields
//!
//! Resolution never blocks an estimate: when the resolver has nothing usable
//! the rider's typed text stays as it is and the caller gets
//! [`ResolutionOutcome::Unresolved`] instead of an error.

use std::{fmt, sync::Arc};

use domain::{InputField, ResolvedPlace};
use tracing::{debug, instrument};

use crate::ports::AddressResolverPort;

/// Address fields that support autocomplete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    /// Pick-up address
    Origin,
    /// Drop-off address
    Destination,
}

impl From<AddressField> for InputField {
    fn from(field: AddressField) -> Self {
        match field {
            AddressField::Origin => Self::Origin,
            AddressField::Destination => Self::Destination,
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&InputField::from(*self), f)
    }
}

/// Result of a resolution attempt
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    /// The text was resolved to a place with geometry
    Resolved(ResolvedPlace),
    /// Nothing usable came back; keep the typed text
    Unresolved,
}

impl ResolutionOutcome {
    /// Whether resolution succeeded
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Wrapper around the autocomplete collaborator
#[derive(Clone)]
pub struct AddressResolution {
    resolver: Arc<dyn AddressResolverPort>,
}

impl fmt::Debug for AddressResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressResolution").finish_non_exhaustive()
    }
}

impl AddressResolution {
    /// Create a new address resolution wrapper
    pub fn new(resolver: Arc<dyn AddressResolverPort>) -> Self {
        Self { resolver }
    }

    /// Resolve `typed`, swallowing resolver failures
    #[instrument(skip(self))]
    pub async fn resolve(&self, typed: &str) -> ResolutionOutcome {
        if typed.trim().is_empty() {
            return ResolutionOutcome::Unresolved;
        }

        match self.resolver.resolve(typed).await {
            Ok(Some(candidate)) => candidate
                .into_resolved(typed)
                .map_or(ResolutionOutcome::Unresolved, ResolutionOutcome::Resolved),
            Ok(None) => ResolutionOutcome::Unresolved,
            Err(e) => {
                debug!(error = %e, "Address resolution failed");
                ResolutionOutcome::Unresolved
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::Coordinate;

    use super::*;
    use crate::ports::{GatewayError, MockAddressResolverPort, PlaceCandidate};

    fn resolution(mock: MockAddressResolverPort) -> AddressResolution {
        AddressResolution::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn place_with_geometry_resolves() {
        let mut mock = MockAddressResolverPort::new();
        mock.expect_resolve().times(1).returning(|_| {
            Ok(Some(PlaceCandidate {
                formatted_address: Some("Av. Paulista, 1578 - Bela Vista".to_string()),
                location: Some(Coordinate::new_unchecked(-23.561, -46.656)),
            }))
        });

        let outcome = resolution(mock).resolve("paulista 1578").await;
        assert_eq!(
            outcome,
            ResolutionOutcome::Resolved(ResolvedPlace::new(
                "Av. Paulista, 1578 - Bela Vista",
                Coordinate::new_unchecked(-23.561, -46.656),
            ))
        );
    }

    #[tokio::test]
    async fn place_without_geometry_is_unresolved() {
        let mut mock = MockAddressResolverPort::new();
        mock.expect_resolve().returning(|_| {
            Ok(Some(PlaceCandidate {
                formatted_address: Some("Somewhere".to_string()),
                location: None,
            }))
        });

        assert_eq!(
            resolution(mock).resolve("somewhere").await,
            ResolutionOutcome::Unresolved
        );
    }

    #[tokio::test]
    async fn resolver_failure_is_swallowed() {
        let mut mock = MockAddressResolverPort::new();
        mock.expect_resolve()
            .returning(|_| Err(GatewayError::unreachable("offline")));

        let outcome = resolution(mock).resolve("A St").await;
        assert!(!outcome.is_resolved());
    }

    #[tokio::test]
    async fn blank_text_skips_resolver() {
        let mut mock = MockAddressResolverPort::new();
        mock.expect_resolve().times(0);

        assert_eq!(
            resolution(mock).resolve("   ").await,
            ResolutionOutcome::Unresolved
        );
    }

    #[test]
    fn address_field_maps_to_input_field() {
        assert_eq!(InputField::from(AddressField::Origin), InputField::Origin);
        assert_eq!(AddressField::Destination.to_string(), "destination");
    }
}
