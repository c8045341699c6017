//! HTTP integration of the alert hook.
//!
//! # Data Flow
//! ```text
//! Request
//!     → client.rs (hyper-util client, tracing)
//!     → layer.rs (AlertService wraps the inner service)
//!     → network round-trip
//!     → interceptor.rs (inspect headers, notify)
//!     → Response handed back unchanged
//! ```

pub mod client;
pub mod interceptor;
pub mod layer;

pub use client::{build_client, AlertingClient, ClientError};
pub use interceptor::AlertInterceptor;
pub use layer::{AlertLayer, AlertService};
