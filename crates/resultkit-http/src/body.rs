//! HTTP response body type.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body_util::Full;

/// Response body for envelope responses.
///
/// Envelopes are small and fully buffered, so bodies are either a single
/// buffered chunk or empty.
#[derive(Debug, Default)]
pub enum ResultResponseBody {
    /// A fully buffered response body.
    Buffered(Full<Bytes>),
    /// An empty body (plain-text strategy, failed dispatch fallback).
    #[default]
    Empty,
}

impl ResultResponseBody {
    /// Create a response body from raw bytes. Empty input yields [`Self::Empty`].
    #[must_use]
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        let data = data.into();
        if data.is_empty() {
            Self::Empty
        } else {
            Self::Buffered(Full::new(data))
        }
    }

    /// Create an empty response body.
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }
}

impl http_body::Body for ResultResponseBody {
    type Data = Bytes;
    type Error = std::io::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<http_body::Frame<Self::Data>, Self::Error>>> {
        match self.get_mut() {
            Self::Buffered(full) => Pin::new(full)
                .poll_frame(cx)
                .map_err(|never| match never {}),
            Self::Empty => Poll::Ready(None),
        }
    }

    fn is_end_stream(&self) -> bool {
        match self {
            Self::Buffered(full) => full.is_end_stream(),
            Self::Empty => true,
        }
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self {
            Self::Buffered(full) => full.size_hint(),
            Self::Empty => http_body::SizeHint::with_exact(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body::Body;
    use http_body_util::BodyExt;

    use super::*;

    #[test]
    fn test_should_report_exact_size() {
        let body = ResultResponseBody::from_bytes("hello");
        assert_eq!(body.size_hint().exact(), Some(5));
        assert!(ResultResponseBody::from_bytes(Bytes::new()).is_end_stream());
    }

    #[test]
    fn test_should_collect_buffered_bytes() {
        let collected = tokio_test::block_on(ResultResponseBody::from_bytes("{}").collect()).unwrap();
        assert_eq!(collected.to_bytes(), Bytes::from_static(b"{}"));
    }
}
