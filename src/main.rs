//! alert-probe
//!
//! Sends one request through the intercepted client and reports any alert
//! the response carries.

use std::path::PathBuf;
use std::time::Duration;

use alert_interceptor::alert::{AlertHeaderNames, ChannelNotifier};
use alert_interceptor::config::{load_config, InterceptorConfig};
use alert_interceptor::http::{self, AlertLayer};
use alert_interceptor::observability::{logging, metrics};
use axum::body::Body;
use axum::http::{Method, Request};
use clap::Parser;

#[derive(Parser)]
#[command(name = "alert-probe")]
#[command(about = "Send a request and report alerts found in the response headers", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Application name used in the alert headers (overrides config).
    #[arg(short, long)]
    app: Option<String>,

    /// HTTP method.
    #[arg(short = 'X', long, default_value = "GET")]
    method: Method,

    /// Print alerts as JSON lines.
    #[arg(long)]
    json: bool,

    /// Target URL.
    url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => InterceptorConfig::default(),
    };
    if let Some(app) = cli.app {
        config.alerts.app_name = app;
    }

    logging::init_logging(&config.observability);

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let names = AlertHeaderNames::new(config.alerts.app_name.as_str())?;
    tracing::debug!(
        alert_header = %names.alert,
        params_header = %names.params,
        "Configuration loaded"
    );

    let (notifier, mut alerts) = ChannelNotifier::new();
    let client = http::build_client(AlertLayer::new(names, notifier));

    let req = Request::builder()
        .method(cli.method)
        .uri(cli.url.as_str())
        .body(Body::empty())?;

    let timeout = Duration::from_secs(config.client.timeout_secs);
    let response = http::client::send(client, req, timeout).await?;

    println!("{:?} {}", response.version(), response.status());

    while let Ok(alert) = alerts.try_recv() {
        if cli.json {
            println!("{}", serde_json::to_string(&alert)?);
        } else {
            match alert.options.param {
                Some(param) => println!("alert: {} ({})", alert.key, param),
                None => println!("alert: {}", alert.key),
            }
        }
    }

    Ok(())
}
