//! Notification adapters - Implement NotificationPort
//!
//! [`TracingNotifier`] writes notifications to the log; [`ChannelNotifier`]
//! hands them to a front end over an unbounded channel.

use application::ports::{Notification, NotificationLevel, NotificationPort};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Notifier that logs every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => {
                info!(message = %notification.message, "Rider notified");
            },
            NotificationLevel::Error => {
                warn!(
                    message = %notification.message,
                    detail = notification.detail.as_deref().unwrap_or_default(),
                    "Rider notified of failure"
                );
            },
        }
    }
}

/// Notifier that forwards notifications to a receiver
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiving end of its channel
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NotificationPort for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if let Err(e) = self.tx.send(notification) {
            warn!(message = %e.0.message, "Notification dropped, receiver is gone");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_delivers_in_order() {
        let (notifier, mut rx) = ChannelNotifier::channel();
        notifier.notify(Notification::error("Invalid data", Some("INVALID_DATA".into())));
        notifier.notify(Notification::success("Ride confirmed successfully"));

        let first = rx.try_recv().unwrap();
        assert_eq!(first.level, NotificationLevel::Error);
        assert_eq!(first.detail.as_deref(), Some("INVALID_DATA"));
        assert_eq!(rx.try_recv().unwrap().message, "Ride confirmed successfully");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_channel_does_not_panic() {
        let (notifier, rx) = ChannelNotifier::channel();
        drop(rx);
        notifier.notify(Notification::success("ignored"));
    }

    #[test]
    fn tracing_notifier_accepts_both_levels() {
        TracingNotifier.notify(Notification::success("ok"));
        TracingNotifier.notify(Notification::error("failed", None));
    }
}
