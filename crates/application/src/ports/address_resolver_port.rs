//! Address resolver port
//!
//! Capability interface over the place-autocomplete collaborator. The
//! collaborator is event-driven; callers treat it as request/response.

use async_trait::async_trait;
use domain::{Coordinate, ResolvedPlace};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use super::GatewayError;

/// Raw place returned by the autocomplete collaborator
///
/// Either part may be missing; a candidate without geometry does not count
/// as a resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    /// Canonical address text, if the collaborator provided one
    pub formatted_address: Option<String>,
    /// Geocoded position, if the collaborator provided one
    pub location: Option<Coordinate>,
}

impl PlaceCandidate {
    /// Turn the candidate into a resolved place
    ///
    /// Returns `None` without geometry. A missing address falls back to
    /// `typed`, so the rider's text is never blanked out.
    #[must_use]
    pub fn into_resolved(self, typed: &str) -> Option<ResolvedPlace> {
        let location = self.location?;
        let address = self
            .formatted_address
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| typed.to_string());
        Some(ResolvedPlace::new(address, location))
    }
}

/// Port for resolving free text into a place
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AddressResolverPort: Send + Sync {
    /// Resolve `text`; `Ok(None)` means nothing matched
    async fn resolve(&self, text: &str) -> Result<Option<PlaceCandidate>, GatewayError>;
}
