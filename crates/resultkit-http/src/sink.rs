//! Response sinks: the transport targets an envelope is written to.
//!
//! A sink exposes the transport's current content type and status, accepts
//! the committed head (status and `Content-Type`), and receives the body.
//! Two implementations are provided:
//!
//! - [`BufferedSink`]: collects everything in memory and becomes an `http::Response`.
//! - [`StreamSink`]: keeps the head in memory and streams the body to an `AsyncWrite`.

use std::future::Future;
use std::io;
use std::pin::Pin;

use bytes::{Bytes, BytesMut};
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, StatusCode};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::body::ResultResponseBody;

/// Future returned by [`ResponseSink::write_body`].
pub type WriteFuture<'a> = Pin<Box<dyn Future<Output = io::Result<()>> + Send + 'a>>;

/// Transport target for one envelope.
pub trait ResponseSink: Send {
    /// The transport's current content type, if any.
    fn content_type(&self) -> Option<&str>;

    /// The transport's current status code.
    fn status(&self) -> StatusCode;

    /// Set the `Content-Type` header.
    fn set_content_type(&mut self, value: HeaderValue);

    /// Set the status code.
    fn set_status(&mut self, status: StatusCode);

    /// Write the body. Dropping the returned future aborts the write.
    fn write_body(&mut self, body: Bytes) -> WriteFuture<'_>;
}

fn content_type_of(headers: &HeaderMap) -> Option<&str> {
    headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
}

/// In-memory sink converted into an `http::Response` once dispatch completes.
#[derive(Debug)]
pub struct BufferedSink {
    status: StatusCode,
    headers: HeaderMap,
    body: BytesMut,
}

impl BufferedSink {
    /// Create a sink with status 200 and no headers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_status(StatusCode::OK)
    }

    /// Create a sink with a given default status.
    #[must_use]
    pub fn with_status(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: BytesMut::new(),
        }
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable response headers, e.g. to pre-set a transport content type.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Body bytes written so far.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Convert into an HTTP response.
    #[must_use]
    pub fn into_response(self) -> http::Response<ResultResponseBody> {
        let mut response = http::Response::new(ResultResponseBody::from_bytes(self.body.freeze()));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl Default for BufferedSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSink for BufferedSink {
    fn content_type(&self) -> Option<&str> {
        content_type_of(&self.headers)
    }

    fn status(&self) -> StatusCode {
        self.status
    }

    fn set_content_type(&mut self, value: HeaderValue) {
        self.headers.insert(CONTENT_TYPE, value);
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn write_body(&mut self, body: Bytes) -> WriteFuture<'_> {
        self.body.extend_from_slice(&body);
        Box::pin(std::future::ready(Ok(())))
    }
}

/// Sink that streams the body to an async writer.
///
/// Status and headers stay in memory; once set they are not touched again,
/// so a failed or cancelled body write leaves them intact.
#[derive(Debug)]
pub struct StreamSink<W> {
    status: StatusCode,
    headers: HeaderMap,
    writer: W,
}

impl<W> StreamSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Create a sink with status 200 over `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            writer,
        }
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable response headers.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Consume the sink, returning status, headers and the writer.
    pub fn into_parts(self) -> (StatusCode, HeaderMap, W) {
        (self.status, self.headers, self.writer)
    }
}

impl<W> ResponseSink for StreamSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    fn content_type(&self) -> Option<&str> {
        content_type_of(&self.headers)
    }

    fn status(&self) -> StatusCode {
        self.status
    }

    fn set_content_type(&mut self, value: HeaderValue) {
        self.headers.insert(CONTENT_TYPE, value);
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn write_body(&mut self, body: Bytes) -> WriteFuture<'_> {
        Box::pin(async move {
            self.writer.write_all(&body).await?;
            self.writer.flush().await
        })
    }
}
