//! Alert header names, notifier payloads and error definitions.

use axum::http::header::{HeaderName, InvalidHeaderName, InvalidHeaderValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building alert headers.
#[derive(Debug, Error)]
pub enum AlertError {
    /// The application name does not produce a valid header name.
    #[error("invalid application name {app:?}: {source}")]
    InvalidAppName {
        app: String,
        #[source]
        source: InvalidHeaderName,
    },

    /// A message key or parameter cannot be carried in a header value.
    #[error("invalid value for header {header}: {source}")]
    InvalidHeaderValue {
        header: HeaderName,
        #[source]
        source: InvalidHeaderValue,
    },
}

/// Result type for alert header operations.
pub type AlertResult<T> = Result<T, AlertError>;

/// The three header names an application uses to signal alerts.
///
/// Derived from the application name: `X-<app>-alert`, `X-<app>-params`
/// and `X-<app>-error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertHeaderNames {
    app: String,
    pub alert: HeaderName,
    pub params: HeaderName,
    pub error: HeaderName,
}

impl AlertHeaderNames {
    /// Derive the header names for `app`.
    pub fn new(app: impl Into<String>) -> AlertResult<Self> {
        let app = app.into();
        let name = |suffix: &str| {
            HeaderName::try_from(format!("X-{}-{}", app, suffix)).map_err(|source| {
                AlertError::InvalidAppName {
                    app: app.clone(),
                    source,
                }
            })
        };

        let alert = name("alert")?;
        let params = name("params")?;
        let error = name("error")?;

        Ok(Self {
            app,
            alert,
            params,
            error,
        })
    }

    /// The application name the headers were derived from.
    pub fn app(&self) -> &str {
        &self.app
    }
}

/// Options handed to the notifier together with the alert key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertOptions {
    /// Value of the params header, if present.
    pub param: Option<String>,
}

/// An owned alert as forwarded to a notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub key: String,
    pub options: AlertOptions,
}
