//! Workflow phases and the snapshot published to observers

use std::{fmt, sync::Arc};

use domain::{DriverId, DriverOffer, Estimate, MapOverlay, RiderInput, build_overlay};

use crate::error::ApplicationError;

/// Where the ride workflow currently is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WorkflowPhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Waiting for the estimate gateway
    Estimating,
    /// Offers are on screen
    EstimateReady,
    /// The last estimate request failed; no estimate is held
    EstimateFailed,
    /// Waiting for the confirm gateway
    Confirming,
    /// The ride was booked; nothing further happens in this workflow
    Confirmed,
    /// Confirmation failed; offers stay on screen
    ConfirmFailed,
}

impl WorkflowPhase {
    /// Whether an estimate may be requested from this phase
    #[must_use]
    pub const fn can_request_estimate(self) -> bool {
        !matches!(self, Self::Confirming | Self::Confirmed)
    }

    /// Whether a driver offer may be selected from this phase
    #[must_use]
    pub const fn can_select_offer(self) -> bool {
        matches!(self, Self::EstimateReady | Self::ConfirmFailed)
    }

    /// Whether a network call is outstanding
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Estimating | Self::Confirming)
    }
}

impl fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Estimating => "estimating",
            Self::EstimateReady => "estimate ready",
            Self::EstimateFailed => "estimate failed",
            Self::Confirming => "confirming",
            Self::Confirmed => "confirmed",
            Self::ConfirmFailed => "confirm failed",
        };
        f.write_str(name)
    }
}

/// The estimate currently held by the workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEstimate {
    /// Request generation that produced this estimate
    pub generation: u64,
    /// Input submitted with the request (trimmed)
    pub input: RiderInput,
    /// The estimate itself
    pub estimate: Arc<Estimate>,
    /// Map overlay derived from the estimate's endpoints
    pub overlay: MapOverlay,
}

impl ActiveEstimate {
    pub(super) fn new(generation: u64, input: RiderInput, estimate: Estimate) -> Self {
        let overlay = build_overlay(estimate.origin, estimate.destination);
        Self {
            generation,
            input,
            estimate: Arc::new(estimate),
            overlay,
        }
    }

    /// Offers in backend order
    #[must_use]
    pub fn offers(&self) -> &[DriverOffer] {
        &self.estimate.offers
    }
}

/// Read-only view of the workflow handed to the presentation layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowSnapshot {
    /// Monotonic counter, bumped on every published change
    pub revision: u64,
    /// Current phase
    pub phase: WorkflowPhase,
    /// Current rider input, as typed
    pub input: RiderInput,
    /// Estimate on screen, if any
    pub active: Option<ActiveEstimate>,
    /// Offer being confirmed (or whose confirmation failed)
    pub selected_offer: Option<DriverId>,
    /// Last gateway failure, cleared by the next request
    pub last_error: Option<ApplicationError>,
}

impl WorkflowSnapshot {
    /// Offers that can be rendered; empty when no estimate is held
    #[must_use]
    pub fn offers(&self) -> &[DriverOffer] {
        self.active.as_ref().map_or(&[], ActiveEstimate::offers)
    }

    /// Map overlay to draw, if an estimate is held
    #[must_use]
    pub fn overlay(&self) -> Option<MapOverlay> {
        self.active.as_ref().map(|a| a.overlay)
    }

    /// The held estimate, if any
    #[must_use]
    pub fn estimate(&self) -> Option<&Estimate> {
        self.active.as_ref().map(|a| a.estimate.as_ref())
    }
}

/// Mutable workflow state, guarded by the workflow's lock
#[derive(Debug, Default)]
pub(super) struct WorkflowState {
    pub revision: u64,
    pub phase: WorkflowPhase,
    pub input: RiderInput,
    pub estimate_generation: u64,
    pub in_flight: Option<RiderInput>,
    pub active: Option<ActiveEstimate>,
    pub confirm_generation: u64,
    /// Set from dispatch until the confirm gateway answers, even after a cancel
    pub confirm_in_flight: bool,
    pub selected: Option<DriverId>,
    pub last_error: Option<ApplicationError>,
}

impl WorkflowState {
    /// Snapshot of the current state without publishing it
    pub fn view(&self) -> WorkflowSnapshot {
        WorkflowSnapshot {
            revision: self.revision,
            phase: self.phase,
            input: self.input.clone(),
            active: self.active.clone(),
            selected_offer: self.selected,
            last_error: self.last_error.clone(),
        }
    }

    /// Bump the revision and snapshot the result for publishing
    pub fn next_snapshot(&mut self) -> WorkflowSnapshot {
        self.revision += 1;
        self.view()
    }
}
