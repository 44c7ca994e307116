//! Serialization strategy selection and rendering.

use std::fmt;

use bytes::Bytes;
use resultkit_core::ResultKitConfig;
use resultkit_model::{Outcome, XmlPayload};
use serde::Serialize;

use crate::error::DispatchError;
use crate::json;

/// Serialization strategy chosen from the resolved content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Full envelope as JSON.
    Json,
    /// `ApiResult` XML document.
    Xml,
    /// Empty body.
    PlainText,
}

impl Strategy {
    /// Select a strategy by case-insensitive substring match.
    ///
    /// Checked in order: `json`, `xml`, `text/plain`. First match wins.
    #[must_use]
    pub fn select(content_type: &str) -> Option<Self> {
        let lower = content_type.to_ascii_lowercase();
        if lower.contains("json") {
            Some(Self::Json)
        } else if lower.contains("xml") {
            Some(Self::Xml)
        } else if lower.contains("text/plain") {
            Some(Self::PlainText)
        } else {
            None
        }
    }

    /// Strategy name for logging.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::PlainText => "plain",
        }
    }

    /// Render an outcome to a fully buffered body.
    pub fn render<O>(self, outcome: &O, config: &ResultKitConfig) -> Result<Bytes, DispatchError>
    where
        O: Outcome + ?Sized,
        O::Data: Serialize + XmlPayload,
    {
        match self {
            Self::Json => {
                let body = json::to_json(outcome, config.json_naming, config.json_pretty)?;
                Ok(Bytes::from(body))
            }
            Self::Xml => Ok(Bytes::from(resultkit_xml::to_xml(outcome)?)),
            // Payload text rendering is not implemented; the body stays empty.
            Self::PlainText => Ok(Bytes::new()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
