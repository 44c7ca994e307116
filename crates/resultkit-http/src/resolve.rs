//! Content-type resolution.

use resultkit_core::media::{DEFAULT_CHARSET, charset_of};

/// Choose the effective content type.
///
/// Precedence:
/// 1. the envelope's content type, verbatim, whenever it is set (even if empty);
/// 2. the transport's content type, verbatim, if non-empty;
/// 3. `default`.
///
/// Client `Accept` headers and the payload type play no part.
#[must_use]
pub fn resolve_content_type<'a>(
    envelope: Option<&'a str>,
    transport: Option<&'a str>,
    default: &'a str,
) -> &'a str {
    if let Some(content_type) = envelope {
        return content_type;
    }
    match transport {
        Some(content_type) if !content_type.is_empty() => content_type,
        _ => default,
    }
}

/// A resolved content type together with its charset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContentType {
    value: String,
}

impl ResolvedContentType {
    /// Resolve from the three precedence sources.
    #[must_use]
    pub fn resolve(envelope: Option<&str>, transport: Option<&str>, default: &str) -> Self {
        Self {
            value: resolve_content_type(envelope, transport, default).to_owned(),
        }
    }

    /// The resolved content type string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The `charset` parameter, falling back to `utf-8`.
    #[must_use]
    pub fn charset(&self) -> &str {
        charset_of(&self.value).unwrap_or(DEFAULT_CHARSET)
    }

    /// Consume, returning the content type string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

impl std::fmt::Display for ResolvedContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "application/json; charset=utf-8";

    #[test]
    fn test_should_apply_precedence_for_all_combinations() {
        let cases = [
            (None, None, DEFAULT),
            (None, Some("text/plain"), "text/plain"),
            (Some("application/xml"), None, "application/xml"),
            (Some("application/xml"), Some("text/plain"), "application/xml"),
        ];
        for (envelope, transport, expected) in cases {
            assert_eq!(
                resolve_content_type(envelope, transport, DEFAULT),
                expected,
                "envelope={envelope:?} transport={transport:?}",
            );
        }
    }

    #[test]
    fn test_should_skip_empty_transport_content_type() {
        assert_eq!(resolve_content_type(None, Some(""), DEFAULT), DEFAULT);
    }

    #[test]
    fn test_should_use_explicit_empty_envelope_content_type() {
        assert_eq!(resolve_content_type(Some(""), Some("text/plain"), DEFAULT), "");
    }

    #[test]
    fn test_should_report_charset() {
        let resolved = ResolvedContentType::resolve(None, Some("text/plain; charset=latin1"), DEFAULT);
        assert_eq!(resolved.as_str(), "text/plain; charset=latin1");
        assert_eq!(resolved.charset(), "latin1");

        let resolved = ResolvedContentType::resolve(Some("application/xml"), None, DEFAULT);
        assert_eq!(resolved.charset(), "utf-8");
    }
}
