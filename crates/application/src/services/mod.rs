//! Application services

mod address_resolution;
mod ride_history_service;
mod ride_workflow;

pub use address_resolution::{AddressField, AddressResolution, ResolutionOutcome};
pub use ride_history_service::RideHistoryService;
pub use ride_workflow::{
    ActiveEstimate, CONFIRMED_MESSAGE, ConfirmOutcome, EstimateOutcome, RideWorkflow,
    WorkflowPhase, WorkflowSnapshot,
};
