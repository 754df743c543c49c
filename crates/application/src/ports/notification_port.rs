//! Notification port
//!
//! User-visible toasts for successes and failures.

use std::fmt;

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// Operation succeeded
    Success,
    /// Operation failed
    Error,
}

/// A message for the rider, with an optional secondary line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity
    pub level: NotificationLevel,
    /// Main line
    pub message: String,
    /// Secondary detail line
    pub detail: Option<String>,
}

impl Notification {
    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            detail: None,
        }
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            detail,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}\n{detail}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Port for presenting notifications to the rider
#[cfg_attr(test, automock)]
pub trait NotificationPort: Send + Sync {
    /// Show a notification
    fn notify(&self, notification: Notification);
}
