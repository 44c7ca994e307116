//! Media type constants used when resolving the response format.

/// Content type used when neither the envelope nor the transport carries one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Content type installed by the `xml()` envelope factories.
pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Default charset reported when a content type carries no `charset` parameter.
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Extract the `charset` parameter from a content type string.
///
/// Parameter names are matched case-insensitively and surrounding quotes are
/// stripped. Returns `None` when no `charset` parameter is present.
#[must_use]
pub fn charset_of(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            let value = value.trim().trim_matches('"');
            (!value.is_empty()).then_some(value)
        } else {
            None
        }
    })
}
