//! Core configuration, media types, and error definitions for ResultKit.
//!
//! This crate holds the pieces shared by the envelope model, the XML writer
//! and the HTTP executor: the default content types, the JSON naming policy
//! applied to envelope fields, and the environment-driven configuration.

mod config;
mod error;
pub mod media;

pub use config::{JsonNamingPolicy, ResultKitConfig};
pub use error::{ResultKitError, ResultKitResult};
pub use media::{DEFAULT_CONTENT_TYPE, XML_CONTENT_TYPE};
