//! HTTP service implementing the hyper `Service` trait.

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::BodyExt;
use resultkit_model::Envelope;

use crate::body::ResultResponseBody;
use crate::error::DispatchError;
use crate::executor::ResultExecutor;
use crate::render::{Reply, reply};
use crate::sink::BufferedSink;

/// Header carrying the per-request identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Trait that the application's endpoint logic must implement.
///
/// The handler receives the request head and the collected body, and returns
/// an envelope. Status, headers and body are produced by the executor.
pub trait EndpointHandler: Send + Sync + 'static {
    /// Handle one request and produce an envelope.
    fn handle(
        &self,
        parts: http::request::Parts,
        body: Bytes,
    ) -> Pin<Box<dyn Future<Output = Reply> + Send>>;
}

/// Hyper `Service` dispatching handler envelopes through a [`ResultExecutor`].
pub struct ResultHttpService<H: EndpointHandler> {
    handler: Arc<H>,
    executor: ResultExecutor,
}

impl<H: EndpointHandler> ResultHttpService<H> {
    /// Create a new `ResultHttpService`.
    pub fn new(handler: Arc<H>, executor: ResultExecutor) -> Self {
        Self { handler, executor }
    }

    /// The executor used for every response.
    #[must_use]
    pub fn executor(&self) -> &ResultExecutor {
        &self.executor
    }
}

impl<H: EndpointHandler> Clone for ResultHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            executor: self.executor.clone(),
        }
    }
}

impl<H: EndpointHandler> fmt::Debug for ResultHttpService<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultHttpService")
            .field("executor", &self.executor)
            .finish_non_exhaustive()
    }
}

impl<H, B> hyper::service::Service<http::Request<B>> for ResultHttpService<H>
where
    H: EndpointHandler,
    B: http_body::Body + Send + 'static,
    B::Data: Send,
    B::Error: fmt::Display,
{
    type Response = http::Response<ResultResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<B>) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        let executor = self.executor.clone();
        let request_id = uuid::Uuid::new_v4().to_string();

        Box::pin(async move {
            let response = process_request(req, handler.as_ref(), &executor, &request_id).await;
            Ok(add_common_headers(response, &request_id))
        })
    }
}

/// Run one request through handler and executor.
async fn process_request<H, B>(
    req: http::Request<B>,
    handler: &H,
    executor: &ResultExecutor,
    request_id: &str,
) -> http::Response<ResultResponseBody>
where
    H: EndpointHandler,
    B: http_body::Body + Send + 'static,
    B::Data: Send,
    B::Error: fmt::Display,
{
    let (parts, body) = req.into_parts();
    tracing::debug!(
        request_id,
        method = %parts.method,
        path = parts.uri.path(),
        "handling request",
    );

    let outcome = match collect_body(body).await {
        Ok(body) => handler.handle(parts, body).await,
        Err(message) => reply(Envelope::bad_request(message)),
    };

    let mut sink = BufferedSink::new();
    match outcome.render(executor, &mut sink).await {
        Ok(()) => sink.into_response(),
        Err(err) => dispatch_failure_response(executor, &err, request_id).await,
    }
}

/// Collect the request body into a single `Bytes` buffer.
async fn collect_body<B>(body: B) -> Result<Bytes, String>
where
    B: http_body::Body,
    B::Error: fmt::Display,
{
    body.collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| format!("Failed to read request body: {e}"))
}

/// Render a dispatch error as a 500 JSON envelope, or a bare 500 if even that fails.
async fn dispatch_failure_response(
    executor: &ResultExecutor,
    err: &DispatchError,
    request_id: &str,
) -> http::Response<ResultResponseBody> {
    tracing::error!(request_id, error = %err, "envelope dispatch failed");

    let envelope = Envelope::server_error(err.to_string());
    let mut sink = BufferedSink::new();
    match executor.execute(&envelope, &mut sink).await {
        Ok(()) => sink.into_response(),
        Err(e) => {
            tracing::error!(request_id, error = %e, "failed to render error envelope");
            let mut response = http::Response::new(ResultResponseBody::empty());
            *response.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
            response
        }
    }
}

/// Add headers common to every response.
fn add_common_headers(
    mut response: http::Response<ResultResponseBody>,
    request_id: &str,
) -> http::Response<ResultResponseBody> {
    let headers = response.headers_mut();

    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.entry(REQUEST_ID_HEADER).or_insert(hv);
    }

    headers.insert("server", http::HeaderValue::from_static("ResultKit"));

    response
}
