//! Navigator port
//!
//! Screen transitions triggered by the workflow.

use std::fmt;

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// Screens the workflow can send the rider to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Route {
    /// Estimate and offer screen
    Dashboard,
    /// Past rides of one customer
    RideHistory {
        /// Customer whose rides to show
        customer_id: String,
    },
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard => write!(f, "/"),
            Self::RideHistory { customer_id } => {
                write!(f, "/ride-history?customer_id={customer_id}")
            },
        }
    }
}

/// Port for moving between screens
#[cfg_attr(test, automock)]
pub trait NavigatorPort: Send + Sync {
    /// Go to `route`
    fn navigate(&self, route: Route);
}
