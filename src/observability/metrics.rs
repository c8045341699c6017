//! Metrics collection and exposition.
//!
//! # Metrics
//! - `alert_interceptor_alerts_forwarded_total` (counter): alerts handed to
//!   the notifier, labelled by app

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const ALERTS_FORWARDED: &str = "alert_interceptor_alerts_forwarded_total";

/// Start the Prometheus exporter on `addr`.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count one alert forwarded to a notifier.
pub fn record_alert_forwarded(app: &str) {
    metrics::counter!(ALERTS_FORWARDED, "app" => app.to_string()).increment(1);
}
