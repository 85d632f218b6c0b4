//! Explicit notification handle for surfacing fetch errors to the UI layer.
//!
//! Consumers subscribe for a receiver and deregister by dropping it; nothing
//! mutates a process-wide function pointer. Publishing with no subscribers is
//! a no-op, not an error.

use tokio::sync::broadcast;

/// Capacity of the notice channel; older notices are dropped for consumers
/// that lag further behind than this.
const NOTICE_CHANNEL_CAPACITY: usize = 16;

/// How prominently a notice should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something went wrong, e.g. a fetch failure
    Error,
    /// A positive confirmation
    Success,
    /// Neutral information
    Info,
}

/// A single user-facing notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Rendering severity
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

/// Publish/subscribe handle for notices
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notice>,
}

impl Notifier {
    /// Create a new notifier with no subscribers
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(NOTICE_CHANNEL_CAPACITY);
        Notifier { tx }
    }

    /// Register a consumer. Dropping the returned receiver deregisters it.
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }

    /// Publish a notice to all current subscribers
    pub fn notify(&self, severity: Severity, message: impl Into<String>) {
        let notice = Notice {
            severity,
            message: message.into(),
        };
        monitor_debug!("(notify) {:?}", notice);

        // send only fails with zero subscribers, which is fine
        let _ = self.tx.send(notice);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_notice() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        notifier.notify(Severity::Error, "Flight ZZ999 not found");

        let notice = rx.recv().await.expect("notice delivered");
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, "Flight ZZ999 not found");
    }

    #[tokio::test]
    async fn test_notify_without_subscribers_is_noop() {
        let notifier = Notifier::new();
        notifier.notify(Severity::Info, "nobody is listening");
    }

    #[tokio::test]
    async fn test_dropped_receiver_deregisters() {
        let notifier = Notifier::new();
        let rx = notifier.subscribe();
        drop(rx);

        notifier.notify(Severity::Info, "after deregistration");

        let mut rx = notifier.subscribe();
        notifier.notify(Severity::Success, "fresh subscription");
        let notice = rx.recv().await.expect("only the fresh notice arrives");
        assert_eq!(notice.severity, Severity::Success);
    }
}
