//! Envelope dispatch: resolve, select, render, commit, write.

use std::sync::Arc;

use http::{HeaderValue, StatusCode};
use resultkit_core::ResultKitConfig;
use resultkit_model::{Outcome, XmlPayload};
use serde::Serialize;

use crate::error::DispatchError;
use crate::resolve::ResolvedContentType;
use crate::sink::ResponseSink;
use crate::strategy::Strategy;

/// Stateless executor writing envelopes to response sinks.
///
/// Cheap to clone; one instance can serve every request of a process.
#[derive(Debug, Clone, Default)]
pub struct ResultExecutor {
    config: Arc<ResultKitConfig>,
}

impl ResultExecutor {
    /// Create an executor with the given configuration.
    #[must_use]
    pub fn new(config: ResultKitConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The executor's configuration.
    #[must_use]
    pub fn config(&self) -> &ResultKitConfig {
        &self.config
    }

    /// Write `outcome` to `sink`.
    ///
    /// 1. Resolve the content type (envelope, then sink, then default).
    /// 2. Select the strategy and render the body.
    /// 3. Set the sink's `Content-Type`, and its status if the envelope carries one.
    /// 4. Write the body.
    ///
    /// Rendering happens before the head is committed, so unsupported content
    /// types, unsupported payload shapes and invalid status codes leave the
    /// sink untouched. Once step 3 ran, a failing or cancelled write surfaces
    /// as [`DispatchError::Write`] and the head is not revisited.
    pub async fn execute<O, S>(&self, outcome: &O, sink: &mut S) -> Result<(), DispatchError>
    where
        O: Outcome + ?Sized,
        O::Data: Serialize + XmlPayload,
        S: ResponseSink + ?Sized,
    {
        let content_type = ResolvedContentType::resolve(
            outcome.content_type(),
            sink.content_type(),
            &self.config.default_content_type,
        );

        let Some(strategy) = Strategy::select(content_type.as_str()) else {
            tracing::warn!(content_type = %content_type, "no serialization strategy for content type");
            return Err(DispatchError::UnsupportedContentType(
                content_type.into_string(),
            ));
        };

        let header = HeaderValue::from_str(content_type.as_str())
            .map_err(|_| DispatchError::InvalidContentType(content_type.to_string()))?;

        let status = outcome
            .status_code()
            .map(|code| StatusCode::from_u16(code).map_err(|_| DispatchError::InvalidStatusCode(code)))
            .transpose()?;

        let body = strategy.render(outcome, &self.config)?;

        // Head is committed from here on.
        sink.set_content_type(header);
        if let Some(status) = status {
            sink.set_status(status);
        }

        tracing::debug!(
            content_type = %content_type,
            charset = content_type.charset(),
            strategy = %strategy,
            status = sink.status().as_u16(),
            body_len = body.len(),
            "dispatching envelope",
        );

        sink.write_body(body).await.map_err(|e| {
            tracing::error!(error = %e, "failed to write response body");
            DispatchError::Write(e)
        })
    }
}
