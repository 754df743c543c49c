//! Ride history service - read-only listing of a rider's past rides

use std::{fmt, sync::Arc};

use domain::{InputField, RideHistory};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{DriverFilter, Notification, NotificationPort, RideHistoryPort},
};

/// Service for listing past rides
pub struct RideHistoryService {
    history: Arc<dyn RideHistoryPort>,
    notifier: Arc<dyn NotificationPort>,
}

impl fmt::Debug for RideHistoryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RideHistoryService").finish_non_exhaustive()
    }
}

impl RideHistoryService {
    /// Create a new ride history service
    pub fn new(history: Arc<dyn RideHistoryPort>, notifier: Arc<dyn NotificationPort>) -> Self {
        Self { history, notifier }
    }

    /// Fetch the rides of `customer_id`
    ///
    /// Failures are reported to the notification sink and returned so the
    /// caller can clear whatever list it was showing.
    #[instrument(skip(self), fields(filter = %filter))]
    pub async fn fetch(
        &self,
        customer_id: &str,
        filter: DriverFilter,
    ) -> Result<RideHistory, ApplicationError> {
        let customer_id = customer_id.trim();
        if customer_id.is_empty() {
            return Err(ApplicationError::Validation {
                fields: vec![InputField::RiderId],
            });
        }

        match self.history.list_rides(customer_id, filter).await {
            Ok(history) => {
                debug!(rides = history.rides.len(), "Ride history loaded");
                Ok(history)
            },
            Err(e) => {
                let error = ApplicationError::classify(&e);
                warn!(kind = %error.kind(), error = %e, "Ride history request failed");
                self.notifier.notify(Notification::error(
                    error.to_string(),
                    error.detail().map(str::to_string),
                ));
                Err(error)
            },
        }
    }
}
