//! Alert-forwarding response hook.
//!
//! # Responsibilities
//! - Look for `X-<app>-alert` on every completed response
//! - Forward the key and `X-<app>-params` to the notifier
//! - Hand the response back untouched
//!
//! # Design Decisions
//! - A missing alert header means "no alert", never an error
//! - Present values are read as ISO-8859-1, one char per byte, so any
//!   value a server can put on the wire is forwarded
//! - The body is never read or buffered
//! - Only the first value of a repeated header is considered

use axum::http::{HeaderMap, HeaderName, Response};

use crate::alert::{AlertHeaderNames, AlertOptions, Notifier};
use crate::observability::metrics;

/// Inspects responses for alert headers and reports them to a [`Notifier`].
#[derive(Debug, Clone)]
pub struct AlertInterceptor<N> {
    names: AlertHeaderNames,
    notifier: N,
}

impl<N: Notifier> AlertInterceptor<N> {
    /// Create an interceptor for the given header names.
    pub fn new(names: AlertHeaderNames, notifier: N) -> Self {
        Self { names, notifier }
    }

    /// Header names this interceptor watches.
    pub fn names(&self) -> &AlertHeaderNames {
        &self.names
    }

    /// Run the hook on `response` and return it unchanged.
    pub fn intercept<B>(&self, response: Response<B>) -> Response<B> {
        self.inspect(response.headers());
        response
    }

    /// Forward the alert carried by `headers`, if any.
    ///
    /// Returns true when the notifier was called.
    pub fn inspect(&self, headers: &HeaderMap) -> bool {
        let Some(key) = text_header(headers, &self.names.alert) else {
            return false;
        };

        let options = AlertOptions {
            param: text_header(headers, &self.names.params),
        };

        tracing::debug!(
            alert = %key,
            param = ?options.param,
            "Forwarding response alert"
        );
        metrics::record_alert_forwarded(self.names.app());

        self.notifier.success(&key, options);
        true
    }
}

fn text_header(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .map(|v| v.as_bytes().iter().map(|&b| char::from(b)).collect())
}
