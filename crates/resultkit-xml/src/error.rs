//! XML error types.

use std::io;

/// Errors that can occur while writing an envelope as XML.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// The payload type is a keyed collection, which XML cannot express.
    #[error("cannot serialize payload of type {type_name} to XML")]
    UnsupportedPayload {
        /// Fully qualified name of the offending payload type.
        type_name: &'static str,
    },

    /// The payload could not be written structurally.
    #[error("failed to serialize payload to XML: {0}")]
    Payload(String),

    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
