//! Navigation adapter - Implements NavigatorPort over a watch channel
//!
//! The front end subscribes and switches screens whenever the current route
//! changes.

use application::ports::{NavigatorPort, Route};
use tokio::sync::watch;
use tracing::debug;

/// Navigator publishing the current route
#[derive(Debug)]
pub struct WatchNavigator {
    tx: watch::Sender<Route>,
}

impl Default for WatchNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchNavigator {
    /// Create a navigator starting on the dashboard
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Route::Dashboard);
        Self { tx }
    }

    /// Subscribe to route changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.tx.subscribe()
    }

    /// Route currently shown
    #[must_use]
    pub fn current(&self) -> Route {
        self.tx.borrow().clone()
    }
}

impl NavigatorPort for WatchNavigator {
    fn navigate(&self, route: Route) {
        debug!(%route, "Navigating");
        self.tx.send_replace(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard() {
        assert_eq!(WatchNavigator::new().current(), Route::Dashboard);
    }

    #[tokio::test]
    async fn subscribers_see_navigation() {
        let navigator = WatchNavigator::new();
        let mut rx = navigator.subscribe();

        navigator.navigate(Route::RideHistory {
            customer_id: "u1".to_string(),
        });

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Route::RideHistory {
            customer_id: "u1".to_string()
        });
        assert_eq!(navigator.current(), *rx.borrow());
    }
}
