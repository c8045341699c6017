//! HTTP client with the alert hook installed.
//!
//! # Layering
//! ```text
//! TraceLayer → AlertLayer → hyper-util legacy Client
//! ```
//! The alert hook sits closest to the network so it sees the response
//! before any other layer can touch its headers.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use hyper::body::Incoming;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use thiserror::Error;
use tower::{ServiceBuilder, ServiceExt};
use tower_http::{
    classify::{NeverClassifyEos, ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier},
    trace::{ResponseBody, Trace, TraceLayer},
};

use crate::alert::Notifier;
use crate::http::layer::{AlertLayer, AlertService};

/// Plain hyper-util client used underneath the hook.
pub type HttpClient = Client<HttpConnector, Body>;

/// Client service stack returned by [`build_client`].
pub type AlertingClient<N> =
    Trace<AlertService<HttpClient, N>, SharedClassifier<ServerErrorsAsFailures>>;

/// Response type produced by [`AlertingClient`].
pub type ClientResponse = Response<ResponseBody<Incoming, NeverClassifyEos<ServerErrorsFailureClass>>>;

/// Errors raised while sending a request through the client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),
}

/// Build a client whose responses pass through `alerts`.
pub fn build_client<N: Notifier + 'static>(alerts: AlertLayer<N>) -> AlertingClient<N> {
    let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

    ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(alerts)
        .service(client)
}

/// Send one request, giving up after `timeout`.
pub async fn send<N: Notifier + 'static>(
    client: AlertingClient<N>,
    req: Request<Body>,
    timeout: Duration,
) -> Result<ClientResponse, ClientError> {
    match tokio::time::timeout(timeout, client.oneshot(req)).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(ClientError::Timeout(timeout)),
    }
}
