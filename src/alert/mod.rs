//! Alert signalling over HTTP headers.
//!
//! # Data Flow
//! ```text
//! server handler
//!     → headers.rs (X-<app>-alert / X-<app>-params / X-<app>-error)
//!     → HTTP response
//!     → http::interceptor (client side)
//!     → notify.rs (Notifier::success)
//! ```

pub mod headers;
pub mod notify;
pub mod types;

pub use notify::{ChannelNotifier, Notifier, TracingNotifier};
pub use types::{Alert, AlertError, AlertHeaderNames, AlertOptions, AlertResult};
