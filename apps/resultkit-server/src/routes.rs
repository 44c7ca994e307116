//! Demo endpoints.
//!
//! | Path | Envelope |
//! |------|----------|
//! | `/hello` | success carrying `"success"` |
//! | `/success` | empty-success singleton |
//! | `/failure` | generic-failure singleton |
//! | `/xml` | success carrying `"success"`, rendered as XML |
//! | `/plain` | `text/plain`, empty body |
//! | `/stream` | `application/octet-stream`, which no strategy handles |
//! | `/validation` | validates a JSON sign-up body; `?format=xml` asks for XML |
//! | `/health` | server status |
//!
//! Anything else yields a failure envelope with status 404.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use resultkit_core::XML_CONTENT_TYPE;
use resultkit_http::{Reply, reply};
use resultkit_model::{
    DataEnvelope, EMPTY_SUCCESS, Envelope, FAIL_CODE, GENERIC_FAILURE, ValidationErrors, XmlPayload,
};
use serde::{Deserialize, Serialize};

use crate::VERSION;

/// Body accepted by `/validation`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignUp {
    /// Display name, 2 to 32 characters.
    pub name: Option<String>,
    /// Age in years, 1 to 120.
    pub age: Option<u32>,
}

impl SignUp {
    /// Check the body, returning every violated rule.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        match self.name.as_deref().map(str::trim) {
            None | Some("") => errors.add("name", "The Name field is required."),
            Some(name) if !(2..=32).contains(&name.chars().count()) => {
                errors.add("name", "The field Name must be between 2 and 32 characters.");
            }
            Some(_) => {}
        }
        match self.age {
            None => errors.add("age", "The Age field is required."),
            Some(age) if !(1..=120).contains(&age) => {
                errors.add("age", "The field Age must be between 1 and 120.");
            }
            Some(_) => {}
        }
        errors
    }
}

/// Accepted sign-up echoed back by `/validation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Member {
    /// Trimmed display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
}

impl XmlPayload for Member {}

/// Payload of `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Health {
    /// Always `running` while the server accepts requests.
    pub status: &'static str,
    /// Server version.
    pub version: &'static str,
}

impl XmlPayload for Health {}

/// Handler serving the demo endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoHandler;

impl DemoHandler {
    /// Create the handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Route one request to its envelope.
    pub fn route(&self, path: &str, query: Option<&str>, body: &[u8]) -> Reply {
        match path {
            "/hello" => reply(DataEnvelope::ok("success")),
            "/success" => reply(&EMPTY_SUCCESS),
            "/failure" => reply(&GENERIC_FAILURE),
            "/xml" => reply(DataEnvelope::ok("success").with_content_type(XML_CONTENT_TYPE)),
            "/plain" => reply(DataEnvelope::ok("success").with_content_type("text/plain")),
            "/stream" => reply(Envelope::new().with_content_type("application/octet-stream")),
            "/validation" => sign_up(body, wants_xml(query)),
            "/health" => reply(DataEnvelope::ok(Health {
                status: "running",
                version: VERSION,
            })),
            _ => reply(Envelope::fail_with(
                FAIL_CODE,
                format!("No route for {path}"),
                404,
            )),
        }
    }
}

impl resultkit_http::EndpointHandler for DemoHandler {
    fn handle(
        &self,
        parts: http::request::Parts,
        body: Bytes,
    ) -> Pin<Box<dyn Future<Output = Reply> + Send>> {
        let reply = self.route(parts.uri.path(), parts.uri.query(), &body);
        Box::pin(async move { reply })
    }
}

fn wants_xml(query: Option<&str>) -> bool {
    query
        .into_iter()
        .flat_map(|q| q.split('&'))
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key == "format" && value.eq_ignore_ascii_case("xml"))
}

fn sign_up(body: &[u8], xml: bool) -> Reply {
    let request = if body.is_empty() {
        SignUp::default()
    } else {
        match serde_json::from_slice::<SignUp>(body) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "rejecting malformed sign-up body");
                return reply(Envelope::bad_request(format!("Malformed JSON body: {e}")));
            }
        }
    };

    let errors = request.validate();
    if !errors.is_empty() {
        let envelope = DataEnvelope::validation_failed(errors);
        return if xml {
            reply(envelope.with_content_type(XML_CONTENT_TYPE))
        } else {
            reply(envelope)
        };
    }

    let member = Member {
        name: request.name.unwrap_or_default().trim().to_owned(),
        age: request.age.unwrap_or_default(),
    };
    let envelope = DataEnvelope::ok(member);
    if xml {
        reply(envelope.with_content_type(XML_CONTENT_TYPE))
    } else {
        reply(envelope)
    }
}
