//! Alert-forwarding HTTP response interceptor.
//!
//! Servers signal user-facing alerts through `X-<app>-alert` and
//! `X-<app>-params` response headers. The [`http::AlertLayer`] watches
//! every response of the wrapped service and reports those alerts to a
//! [`alert::Notifier`], returning the response untouched.

pub mod alert;
pub mod config;
pub mod http;
pub mod observability;

pub use alert::{Alert, AlertHeaderNames, AlertOptions, Notifier};
pub use config::InterceptorConfig;
pub use http::{AlertInterceptor, AlertLayer, AlertService};
