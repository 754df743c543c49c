//! Ride workflow - estimate, select, confirm
//!
//! The workflow owns the rider input and the estimate on screen, and is the
//! only writer of that state. Every change is published as a
//! [`WorkflowSnapshot`] on a watch channel.
//!
//! Each estimate request gets a generation number. A response is applied
//! only while its generation is still the latest one, so an older response
//! can never overwrite a newer estimate regardless of arrival order.
//! Confirmations are tracked the same way so a cancelled selection never
//! completes.

mod state;

use std::{fmt, sync::Arc};

use domain::{ConfirmRequest, DriverId, DriverOffer, InputField, MapOverlay, RiderInput};
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

pub use self::state::{ActiveEstimate, WorkflowPhase, WorkflowSnapshot};
use self::state::WorkflowState;
use super::address_resolution::{AddressField, AddressResolution, ResolutionOutcome};
use crate::{
    error::ApplicationError,
    ports::{
        AddressResolverPort, ConfirmGatewayPort, EstimateGatewayPort, NavigatorPort, Notification,
        NotificationPort, Route,
    },
};

/// Message shown once a ride is booked
pub const CONFIRMED_MESSAGE: &str = "Ride confirmed successfully";

/// Result of an estimate request that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateOutcome {
    /// The estimate was applied and is now on screen
    Ready(ActiveEstimate),
    /// An identical request was already in flight; nothing was sent
    Suppressed,
    /// A newer request was issued while this one was in flight
    Superseded,
}

/// Result of a confirmation that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The backend accepted the ride
    Confirmed(ConfirmRequest),
    /// The selection was cancelled before the backend answered
    Discarded,
}

/// The estimate-and-confirm state machine
pub struct RideWorkflow {
    estimates: Arc<dyn EstimateGatewayPort>,
    confirmations: Arc<dyn ConfirmGatewayPort>,
    notifier: Arc<dyn NotificationPort>,
    navigator: Arc<dyn NavigatorPort>,
    resolution: Option<AddressResolution>,
    state: Mutex<WorkflowState>,
    snapshots: watch::Sender<WorkflowSnapshot>,
}

impl fmt::Debug for RideWorkflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RideWorkflow")
            .field("phase", &self.state.lock().phase)
            .field("address_resolution", &self.resolution.is_some())
            .finish_non_exhaustive()
    }
}

impl RideWorkflow {
    /// Create a new workflow in the idle phase
    pub fn new(
        estimates: Arc<dyn EstimateGatewayPort>,
        confirmations: Arc<dyn ConfirmGatewayPort>,
        notifier: Arc<dyn NotificationPort>,
        navigator: Arc<dyn NavigatorPort>,
    ) -> Self {
        let (snapshots, _) = watch::channel(WorkflowSnapshot::default());
        Self {
            estimates,
            confirmations,
            notifier,
            navigator,
            resolution: None,
            state: Mutex::new(WorkflowState::default()),
            snapshots,
        }
    }

    /// Enable address autocomplete
    #[must_use]
    pub fn with_address_resolver(mut self, resolver: Arc<dyn AddressResolverPort>) -> Self {
        self.resolution = Some(AddressResolution::new(resolver));
        self
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<WorkflowSnapshot> {
        self.snapshots.subscribe()
    }

    /// Current state
    pub fn snapshot(&self) -> WorkflowSnapshot {
        self.state.lock().view()
    }

    /// Current phase
    pub fn phase(&self) -> WorkflowPhase {
        self.state.lock().phase
    }

    /// Current rider input, as typed
    pub fn input(&self) -> RiderInput {
        self.state.lock().input.clone()
    }

    /// Offers of the estimate on screen, in backend order
    pub fn offers(&self) -> Vec<DriverOffer> {
        self.state
            .lock()
            .active
            .as_ref()
            .map(|a| a.offers().to_vec())
            .unwrap_or_default()
    }

    /// Map overlay for the estimate on screen
    pub fn overlay(&self) -> Option<MapOverlay> {
        self.state.lock().active.as_ref().map(|a| a.overlay)
    }

    /// Replace the text of one input field
    ///
    /// Edits never touch the estimate on screen; a new estimate is only
    /// requested on submit.
    pub fn update_input(&self, field: InputField, text: impl Into<String>) {
        let snapshot = {
            let mut state = self.state.lock();
            state.input.set_field(field, text);
            state.next_snapshot()
        };
        self.publish(snapshot);
    }

    /// Resolve an address field through autocomplete
    ///
    /// On success the field is replaced by the formatted address. Otherwise
    /// the typed text stays as it is.
    #[instrument(skip(self))]
    pub async fn resolve_address(&self, field: AddressField, typed: &str) -> ResolutionOutcome {
        let Some(resolution) = &self.resolution else {
            return ResolutionOutcome::Unresolved;
        };

        let outcome = resolution.resolve(typed).await;
        if let ResolutionOutcome::Resolved(place) = &outcome {
            debug!(address = %place.formatted_address, "Address resolved");
            self.update_input(field.into(), place.formatted_address.clone());
        }
        outcome
    }

    /// Request an estimate for the current input
    pub async fn submit(&self) -> Result<EstimateOutcome, ApplicationError> {
        let input = self.input();
        self.request_estimate(input).await
    }

    /// Request an estimate for `input`
    ///
    /// Blank fields fail locally without a gateway call. A request identical
    /// to the one in flight is suppressed; a different one supersedes it.
    /// Gateway failures are classified, published, notified and returned.
    #[instrument(skip(self, input))]
    pub async fn request_estimate(
        &self,
        input: RiderInput,
    ) -> Result<EstimateOutcome, ApplicationError> {
        input.validate()?;
        let submitted = input.trimmed();

        let (generation, snapshot) = {
            let mut state = self.state.lock();
            if !state.phase.can_request_estimate() {
                return Err(ApplicationError::InvalidState {
                    operation: "request an estimate",
                    phase: state.phase,
                });
            }
            if state.phase == WorkflowPhase::Estimating
                && state.in_flight.as_ref() == Some(&submitted)
            {
                debug!(
                    generation = state.estimate_generation,
                    "Identical estimate already in flight"
                );
                return Ok(EstimateOutcome::Suppressed);
            }

            state.estimate_generation += 1;
            state.phase = WorkflowPhase::Estimating;
            state.input = input;
            state.in_flight = Some(submitted.clone());
            state.selected = None;
            state.last_error = None;
            (state.estimate_generation, state.next_snapshot())
        };
        self.publish(snapshot);

        debug!(generation, rider_id = %submitted.rider_id, "Requesting estimate");
        let result = self.estimates.estimate(&submitted).await;

        let (outcome, snapshot) = {
            let mut state = self.state.lock();
            if state.estimate_generation != generation {
                debug!(
                    generation,
                    latest = state.estimate_generation,
                    "Discarding superseded estimate response"
                );
                return Ok(EstimateOutcome::Superseded);
            }

            state.in_flight = None;
            match result {
                Ok(estimate) => {
                    let active = ActiveEstimate::new(generation, submitted, estimate);
                    state.active = Some(active.clone());
                    state.phase = WorkflowPhase::EstimateReady;
                    (Ok(EstimateOutcome::Ready(active)), state.next_snapshot())
                },
                Err(e) => {
                    let error = ApplicationError::classify(&e);
                    state.active = None;
                    state.phase = WorkflowPhase::EstimateFailed;
                    state.last_error = Some(error.clone());
                    (Err(error), state.next_snapshot())
                },
            }
        };
        self.publish(snapshot);

        match &outcome {
            Ok(EstimateOutcome::Ready(active)) => info!(
                generation,
                offers = active.offers().len(),
                distance_meters = active.estimate.distance_meters,
                "Estimate ready"
            ),
            Err(e) => {
                warn!(generation, kind = %e.kind(), error = %e, "Estimate request failed");
                self.notify_failure(e);
            },
            Ok(_) => {},
        }
        outcome
    }

    /// Select an offer of the estimate on screen and confirm it
    pub async fn select_offer(&self, offer_id: DriverId) -> Result<ConfirmOutcome, ApplicationError> {
        self.confirm_selection(None, offer_id).await
    }

    /// Select an offer from the estimate with the given generation
    ///
    /// Fails with a stale selection when a newer estimate replaced the one
    /// the rider was looking at.
    pub async fn select_offer_from(
        &self,
        generation: u64,
        offer_id: DriverId,
    ) -> Result<ConfirmOutcome, ApplicationError> {
        self.confirm_selection(Some(generation), offer_id).await
    }

    /// Abandon a pending or failed confirmation and return to the offers
    ///
    /// A confirm response that arrives afterwards is discarded.
    pub fn cancel_selection(&self) -> Result<(), ApplicationError> {
        let snapshot = {
            let mut state = self.state.lock();
            if !matches!(
                state.phase,
                WorkflowPhase::Confirming | WorkflowPhase::ConfirmFailed
            ) {
                return Err(ApplicationError::InvalidState {
                    operation: "cancel the selection",
                    phase: state.phase,
                });
            }

            state.confirm_generation += 1;
            state.phase = WorkflowPhase::EstimateReady;
            state.selected = None;
            state.last_error = None;
            state.next_snapshot()
        };
        self.publish(snapshot);
        debug!("Selection cancelled");
        Ok(())
    }

    #[instrument(skip(self), fields(driver_id = %offer_id))]
    async fn confirm_selection(
        &self,
        seen_generation: Option<u64>,
        offer_id: DriverId,
    ) -> Result<ConfirmOutcome, ApplicationError> {
        let (request, attempt, snapshot) = {
            let mut state = self.state.lock();
            if matches!(
                state.phase,
                WorkflowPhase::Confirming | WorkflowPhase::Confirmed
            ) {
                return Err(ApplicationError::InvalidState {
                    operation: "select an offer",
                    phase: state.phase,
                });
            }
            if state.confirm_in_flight {
                return Err(ApplicationError::InvalidState {
                    operation: "select an offer",
                    phase: WorkflowPhase::Confirming,
                });
            }
            // Offers are only selectable from the estimate of the latest request
            let Some(active) = state
                .active
                .as_ref()
                .filter(|a| a.generation == state.estimate_generation)
            else {
                return Err(ApplicationError::StaleSelection { offer_id });
            };
            if seen_generation.is_some_and(|g| g != active.generation) {
                return Err(ApplicationError::StaleSelection { offer_id });
            }
            if !state.phase.can_select_offer() {
                return Err(ApplicationError::InvalidState {
                    operation: "select an offer",
                    phase: state.phase,
                });
            }
            let request = ConfirmRequest::from_selection(&active.input, &active.estimate, offer_id)?;

            state.confirm_generation += 1;
            state.confirm_in_flight = true;
            state.phase = WorkflowPhase::Confirming;
            state.selected = Some(offer_id);
            state.last_error = None;
            (request, state.confirm_generation, state.next_snapshot())
        };
        self.publish(snapshot);

        debug!(price = %request.price, "Confirming ride");
        let result = self.confirmations.confirm(&request).await;

        let (outcome, snapshot) = {
            let mut state = self.state.lock();
            state.confirm_in_flight = false;
            if state.confirm_generation != attempt || state.phase != WorkflowPhase::Confirming {
                warn!(
                    confirmed = result.is_ok(),
                    "Discarding confirm response for a cancelled selection"
                );
                return Ok(ConfirmOutcome::Discarded);
            }

            match result {
                Ok(()) => {
                    state.phase = WorkflowPhase::Confirmed;
                    (Ok(ConfirmOutcome::Confirmed(request)), state.next_snapshot())
                },
                Err(e) => {
                    let error = ApplicationError::classify(&e);
                    state.phase = WorkflowPhase::ConfirmFailed;
                    state.last_error = Some(error.clone());
                    (Err(error), state.next_snapshot())
                },
            }
        };
        self.publish(snapshot);

        match &outcome {
            Ok(ConfirmOutcome::Confirmed(request)) => {
                info!(rider_id = %request.rider_id, "Ride confirmed");
                self.notifier.notify(Notification::success(CONFIRMED_MESSAGE));
                self.navigator.navigate(Route::RideHistory {
                    customer_id: request.rider_id.clone(),
                });
            },
            Err(e) => {
                warn!(kind = %e.kind(), error = %e, "Confirmation failed");
                self.notify_failure(e);
            },
            Ok(ConfirmOutcome::Discarded) => {},
        }
        outcome
    }

    fn notify_failure(&self, error: &ApplicationError) {
        self.notifier.notify(Notification::error(
            error.to_string(),
            error.detail().map(str::to_string),
        ));
    }

    /// Publish a snapshot unless a newer one already went out
    fn publish(&self, snapshot: WorkflowSnapshot) {
        self.snapshots.send_if_modified(|current| {
            if snapshot.revision > current.revision {
                *current = snapshot;
                true
            } else {
                false
            }
        });
    }
}
