//! Notification collaborators.
//!
//! The interceptor only knows the [`Notifier`] trait. Implementations decide
//! what "reporting success" means: a log line, a message on a channel, a
//! toast in some UI.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::alert::types::{Alert, AlertOptions};

/// Receives alerts detected on HTTP responses.
pub trait Notifier: Send + Sync {
    /// Report a successful operation identified by `key`.
    fn success(&self, key: &str, options: AlertOptions);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn success(&self, key: &str, options: AlertOptions) {
        (**self).success(key, options)
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn success(&self, key: &str, options: AlertOptions) {
        (**self).success(key, options)
    }
}

/// Reports alerts as structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, key: &str, options: AlertOptions) {
        tracing::info!(
            target: "alert_interceptor::notify",
            alert = key,
            param = options.param.as_deref().unwrap_or_default(),
            "Success alert"
        );
    }
}

/// Forwards alerts to an unbounded tokio channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Alert>,
}

impl ChannelNotifier {
    /// Create a notifier together with the receiving end of its channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Alert>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn success(&self, key: &str, options: AlertOptions) {
        // Nobody listening is not an error.
        let _ = self.tx.send(Alert {
            key: key.to_string(),
            options,
        });
    }
}
