//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! interceptor, header builders, probe
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (alert counters, optional Prometheus endpoint)
//! ```

pub mod logging;
pub mod metrics;
