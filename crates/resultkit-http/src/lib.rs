//! Content-type resolution, serialization dispatch and HTTP service layer for ResultKit.
//!
//! This crate turns an envelope into bytes on the wire:
//!
//! - **Resolver**: picks the effective content type (envelope, then transport, then default)
//! - **Strategies**: JSON, XML and plain-text renderers chosen by substring match
//! - **Executor**: resolves, validates, commits status/headers, then writes the body
//! - **Sinks**: buffered (`http::Response`) and streaming (`AsyncWrite`) response targets
//! - **Service**: hyper `Service` adapter driving endpoint handlers through the executor

pub mod body;
pub mod error;
pub mod executor;
pub mod json;
pub mod render;
pub mod resolve;
pub mod service;
pub mod sink;
pub mod strategy;

pub use body::ResultResponseBody;
pub use error::DispatchError;
pub use executor::ResultExecutor;
pub use render::{Render, RenderFuture, Reply, reply};
pub use resolve::{ResolvedContentType, resolve_content_type};
pub use service::{EndpointHandler, REQUEST_ID_HEADER, ResultHttpService};
pub use sink::{BufferedSink, ResponseSink, StreamSink, WriteFuture};
pub use strategy::Strategy;
