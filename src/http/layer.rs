//! Tower middleware running the alert hook on every response.
//!
//! Works on anything that speaks `http::Request` → `http::Response`: the
//! hyper-util client on the calling side, an axum `Router` on the serving
//! side, or a plain `service_fn` in tests.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::{Request, Response};
use futures_util::future::BoxFuture;
use tower::{Layer, Service};

use crate::alert::{AlertHeaderNames, Notifier};
use crate::http::interceptor::AlertInterceptor;

/// Layer that wraps services in [`AlertService`].
pub struct AlertLayer<N> {
    interceptor: Arc<AlertInterceptor<N>>,
}

impl<N: Notifier> AlertLayer<N> {
    pub fn new(names: AlertHeaderNames, notifier: N) -> Self {
        Self::from_interceptor(AlertInterceptor::new(names, notifier))
    }

    pub fn from_interceptor(interceptor: AlertInterceptor<N>) -> Self {
        Self {
            interceptor: Arc::new(interceptor),
        }
    }
}

impl<N> Clone for AlertLayer<N> {
    fn clone(&self) -> Self {
        Self {
            interceptor: self.interceptor.clone(),
        }
    }
}

impl<S, N> Layer<S> for AlertLayer<N> {
    type Service = AlertService<S, N>;

    fn layer(&self, inner: S) -> Self::Service {
        AlertService {
            inner,
            interceptor: self.interceptor.clone(),
        }
    }
}

/// Service produced by [`AlertLayer`].
///
/// Errors from the inner service are passed through and never notify.
pub struct AlertService<S, N> {
    inner: S,
    interceptor: Arc<AlertInterceptor<N>>,
}

impl<S: Clone, N> Clone for AlertService<S, N> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            interceptor: self.interceptor.clone(),
        }
    }
}

impl<S, N, ReqBody, ResBody> Service<Request<ReqBody>> for AlertService<S, N>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    N: Notifier + 'static,
    ResBody: 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let interceptor = self.interceptor.clone();
        let fut = self.inner.call(req);

        Box::pin(async move {
            let response = fut.await?;
            Ok(interceptor.intercept(response))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::ChannelNotifier;
    use std::convert::Infallible;
    use tower::{service_fn, ServiceBuilder, ServiceExt};

    fn layer() -> (AlertLayer<ChannelNotifier>, tokio::sync::mpsc::UnboundedReceiver<crate::alert::Alert>) {
        let (notifier, rx) = ChannelNotifier::new();
        (AlertLayer::new(AlertHeaderNames::new("app").unwrap(), notifier), rx)
    }

    #[tokio::test]
    async fn test_layer_notifies_on_alert_response() {
        let (layer, mut rx) = layer();
        let svc = ServiceBuilder::new().layer(layer).service(service_fn(|_req: Request<()>| async {
            Ok::<_, Infallible>(
                Response::builder()
                    .header("X-app-alert", "foo")
                    .header("X-app-params", "bar")
                    .body("done")
                    .unwrap(),
            )
        }));

        let response = svc.oneshot(Request::new(())).await.unwrap();

        assert_eq!(*response.body(), "done");
        let alert = rx.try_recv().unwrap();
        assert_eq!(alert.key, "foo");
        assert_eq!(alert.options.param.as_deref(), Some("bar"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_layer_silent_without_alert() {
        let (layer, mut rx) = layer();
        let svc = layer.layer(service_fn(|_req: Request<()>| async {
            Ok::<_, Infallible>(Response::new("plain"))
        }));

        let response = svc.oneshot(Request::new(())).await.unwrap();

        assert_eq!(*response.body(), "plain");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_layer_propagates_inner_error() {
        let (layer, mut rx) = layer();
        let svc = layer.layer(service_fn(|_req: Request<()>| async {
            Err::<Response<()>, _>("backend unreachable")
        }));

        let err = svc.oneshot(Request::new(())).await.unwrap_err();

        assert_eq!(err, "backend unreachable");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_cloned_services_share_notifier() {
        let (layer, mut rx) = layer();
        let svc = layer.layer(service_fn(|_req: Request<()>| async {
            Ok::<_, Infallible>(Response::builder().header("X-app-alert", "k").body(()).unwrap())
        }));

        svc.clone().oneshot(Request::new(())).await.unwrap();
        svc.oneshot(Request::new(())).await.unwrap();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }
}
