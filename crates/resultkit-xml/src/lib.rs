//! XML serialization of ResultKit envelopes.
//!
//! Envelopes are written as a single `ApiResult` document:
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <ApiResult xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
//!            xmlns:xsd="http://www.w3.org/2001/XMLSchema">
//!   <Code>0</Code>
//!   <Title>OK</Title>
//!   <Data>success</Data>
//! </ApiResult>
//! ```
//!
//! # Conventions
//!
//! - `Detail` and `Data` are omitted when absent.
//! - Structured payloads are written through serde: record fields become child elements.
//! - Keyed-collection payloads (maps, [`ValidationErrors`](resultkit_model::ValidationErrors))
//!   are rejected with [`XmlError::UnsupportedPayload`] before any byte is produced.

pub mod error;
pub mod serialize;

pub use error::XmlError;
pub use serialize::{ROOT_ELEMENT, XSD_NAMESPACE, XSI_NAMESPACE, to_xml};
