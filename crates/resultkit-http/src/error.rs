//! Dispatch error types.

use std::io;

use resultkit_xml::XmlError;

/// Terminal errors raised while dispatching an envelope.
///
/// None of these are retried. Everything except [`DispatchError::Write`] is
/// raised before the sink is touched.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The resolved content type matches no serialization strategy.
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// The resolved content type is not a legal header value.
    #[error("invalid content type header value: {0:?}")]
    InvalidContentType(String),

    /// The envelope's status code is outside the HTTP range.
    #[error("invalid HTTP status code: {0}")]
    InvalidStatusCode(u16),

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML serialization failed or the payload shape is unsupported.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// Writing the body to the sink failed or was aborted.
    #[error("failed to write response body: {0}")]
    Write(#[source] io::Error),
}

impl DispatchError {
    /// Whether the status and headers had already been committed when this error occurred.
    #[must_use]
    pub fn is_after_commit(&self) -> bool {
        matches!(self, Self::Write(_))
    }
}
