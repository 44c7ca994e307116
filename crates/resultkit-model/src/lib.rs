//! Envelope model for ResultKit.
//!
//! Every outcome of an endpoint (success, business failure, validation
//! failure) is wrapped in one of two envelope shapes:
//!
//! - [`Envelope`]: code, title, optional detail and transport hints, no payload.
//! - [`DataEnvelope<T>`]: the same fields plus an optional `data` payload.
//!
//! Both implement [`Outcome`], the read-only view the executor consumes.
//! Payload types declare their XML shape through [`XmlPayload`]; keyed
//! collections such as [`ValidationErrors`] are tagged so the XML writer can
//! reject them without inspecting values at runtime.
//!
//! # Wire conventions
//!
//! - `code == 0` with title `"OK"` means success; `-1` is the generic failure code.
//! - `detail` and `data` are omitted from JSON when absent, never emitted as `null`.
//! - `statusCode` and `contentType` are transport hints and are never serialized.

pub mod envelope;
pub mod outcome;
pub mod payload;
pub mod validation;

pub use envelope::{
    DEFAULT_CODE, DEFAULT_TITLE, DataEnvelope, EMPTY_SUCCESS, Envelope, FAIL_CODE, FAIL_TITLE,
    GENERIC_FAILURE, ListEnvelope, VALIDATION_CODE, VALIDATION_TITLE,
};
pub use outcome::Outcome;
pub use payload::{PayloadKind, XmlPayload};
pub use validation::ValidationErrors;
