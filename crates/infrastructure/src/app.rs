//! Application wiring
//!
//! Builds the workflow, the history service and the map renderer from an
//! [`AppConfig`], connecting every port to its adapter. The front end keeps
//! the returned [`RideFlowApp`] for the lifetime of the page.

use std::sync::Arc;

use application::{
    Notification, RideHistoryService, RideWorkflow,
    ports::{GatewayError, NavigatorPort, NotificationPort, Route},
};
use integration_ride_api::RideApiError;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tracing::info;

use crate::{
    adapters::{ChannelNotifier, GeocodingAddressResolver, RideApiAdapter, WatchNavigator},
    config::{AppConfig, ConfigError},
    maps::{StaticMapError, StaticMapRenderer},
};

/// Errors raised while wiring the application
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The ride backend client could not be built
    #[error("Ride backend client: {0}")]
    RideApi(#[from] RideApiError),

    /// The geocoding client could not be built
    #[error("Geocoding client: {0}")]
    Geocoding(#[from] GatewayError),

    /// The static map endpoint is unusable
    #[error("Static map: {0}")]
    Maps(#[from] StaticMapError),
}

/// Fully wired application
pub struct RideFlowApp {
    /// Estimate and confirmation workflow
    pub workflow: Arc<RideWorkflow>,
    /// Ride history lookups
    pub history: RideHistoryService,
    /// Static map URL builder
    pub map: StaticMapRenderer,
    navigator: Arc<WatchNavigator>,
    notifications: mpsc::UnboundedReceiver<Notification>,
}

impl std::fmt::Debug for RideFlowApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RideFlowApp")
            .field("workflow", &self.workflow)
            .field("route", &self.navigator.current())
            .finish_non_exhaustive()
    }
}

impl RideFlowApp {
    /// Validate `config` and wire every component
    ///
    /// Address autocomplete is enabled only when a maps API key is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a client cannot
    /// be initialized.
    pub fn bootstrap(config: &AppConfig) -> Result<Self, BootstrapError> {
        config.validate()?;

        let rides = Arc::new(RideApiAdapter::from_config(&config.ride_api)?);
        let (notifier, notifications) = ChannelNotifier::channel();
        let notifier: Arc<dyn NotificationPort> = Arc::new(notifier);
        let navigator = Arc::new(WatchNavigator::new());

        let mut workflow = RideWorkflow::new(
            rides.clone(),
            rides.clone(),
            Arc::clone(&notifier),
            Arc::clone(&navigator) as Arc<dyn NavigatorPort>,
        );
        let map = StaticMapRenderer::new(config.maps.clone())?;
        let autocomplete = config.maps.api_key_str().is_some();
        if autocomplete {
            workflow =
                workflow.with_address_resolver(Arc::new(GeocodingAddressResolver::new(&config.maps)?));
        }

        info!(
            environment = %config.environment,
            ride_api = %config.ride_api.base_url,
            autocomplete,
            "RideFlow wired"
        );

        Ok(Self {
            workflow: Arc::new(workflow),
            history: RideHistoryService::new(rides, notifier),
            map,
            navigator,
            notifications,
        })
    }

    /// Subscribe to screen changes
    #[must_use]
    pub fn routes(&self) -> watch::Receiver<Route> {
        self.navigator.subscribe()
    }

    /// Screen currently shown
    #[must_use]
    pub fn current_route(&self) -> Route {
        self.navigator.current()
    }

    /// Wait for the next notification for the rider
    ///
    /// Returns `None` once every notifier has been dropped.
    pub async fn next_notification(&mut self) -> Option<Notification> {
        self.notifications.recv().await
    }

    /// Notifications queued so far, without waiting
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        let mut drained = Vec::new();
        while let Ok(notification) = self.notifications.try_recv() {
            drained.push(notification);
        }
        drained
    }

    /// Current map image URL
    #[must_use]
    pub fn map_url(&self) -> String {
        self.map.url_for(&self.workflow.snapshot())
    }
}
