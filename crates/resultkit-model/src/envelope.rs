//! Envelope types and their factories.
//!
//! Envelopes are built with by-value fluent setters:
//!
//! ```
//! use resultkit_model::{DataEnvelope, Envelope};
//!
//! let failure = Envelope::fail("quota exceeded")
//!     .with_code(42)
//!     .with_detail("daily limit is 100 requests")
//!     .with_status_code(429);
//! assert_eq!(failure.code, 42);
//!
//! let success = DataEnvelope::ok(vec![1, 2, 3]).with_title("listed");
//! assert_eq!(success.data, Some(vec![1, 2, 3]));
//! ```

use std::borrow::Cow;
use std::error::Error;

use resultkit_core::{DEFAULT_CONTENT_TYPE, XML_CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;
use crate::validation::ValidationErrors;

/// Business code of a successful outcome.
pub const DEFAULT_CODE: i32 = 0;
/// Title of a successful outcome.
pub const DEFAULT_TITLE: &str = "OK";
/// Business code used by the failure shortcuts.
pub const FAIL_CODE: i32 = -1;
/// Title of the generic failure singleton.
pub const FAIL_TITLE: &str = "request fail";
/// Business code of a validation failure.
pub const VALIDATION_CODE: i32 = 400_000;
/// Title of a validation failure.
pub const VALIDATION_TITLE: &str = "One or more validation errors occurred.";

/// Process-wide empty success: code 0, title `"OK"`, no status override.
///
/// Statics are read-only; callers needing a variation clone it first.
pub static EMPTY_SUCCESS: Envelope = Envelope::new();

/// Process-wide generic failure: code -1, title `"request fail"`.
pub static GENERIC_FAILURE: Envelope = Envelope::constant(FAIL_CODE, FAIL_TITLE);

/// Envelope for list payloads.
pub type ListEnvelope<T> = DataEnvelope<Vec<T>>;

/// Envelope without a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Envelope {
    /// Business result code.
    pub code: i32,
    /// Short human-readable summary.
    pub title: Cow<'static, str>,
    /// Long-form explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Cow<'static, str>>,
    /// Transport status code to apply; `None` leaves the transport default.
    #[serde(skip)]
    pub status_code: Option<u16>,
    /// Format instruction for the executor.
    #[serde(skip)]
    pub content_type: Option<Cow<'static, str>>,
}

/// Envelope carrying an optional payload of type `T`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataEnvelope<T> {
    /// Business result code.
    pub code: i32,
    /// Short human-readable summary.
    pub title: Cow<'static, str>,
    /// Long-form explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Cow<'static, str>>,
    /// Payload. Zero-sized payloads such as `()` are never written.
    #[serde(skip_serializing_if = "payload_is_absent")]
    pub data: Option<T>,
    /// Transport status code to apply; `None` leaves the transport default.
    #[serde(skip)]
    pub status_code: Option<u16>,
    /// Format instruction for the executor.
    #[serde(skip)]
    pub content_type: Option<Cow<'static, str>>,
}

/// Whether a payload slot holds nothing worth writing.
///
/// A zero-sized value (`()`, unit structs) carries no information, so it is
/// treated like an unset payload by every serializer.
#[allow(clippy::ref_option)]
fn payload_is_absent<T>(data: &Option<T>) -> bool {
    data.is_none() || size_of::<T>() == 0
}

macro_rules! impl_envelope_setters {
    ($ty:ident $(<$g:ident>)?) => {
        impl $(<$g>)? $ty $(<$g>)? {
            /// Set the business code.
            #[must_use]
            pub fn with_code(mut self, code: i32) -> Self {
                self.code = code;
                self
            }

            /// Set the title.
            #[must_use]
            pub fn with_title(mut self, title: impl Into<Cow<'static, str>>) -> Self {
                self.title = title.into();
                self
            }

            /// Set the detail.
            #[must_use]
            pub fn with_detail(mut self, detail: impl Into<Cow<'static, str>>) -> Self {
                self.detail = Some(detail.into());
                self
            }

            /// Set the transport status code. Not validated here.
            #[must_use]
            pub fn with_status_code(mut self, status_code: u16) -> Self {
                self.status_code = Some(status_code);
                self
            }

            /// Clear the status override so the transport default applies.
            #[must_use]
            pub fn without_status_code(mut self) -> Self {
                self.status_code = None;
                self
            }

            /// Set the content type. Any string is accepted.
            #[must_use]
            pub fn with_content_type(mut self, content_type: impl Into<Cow<'static, str>>) -> Self {
                self.content_type = Some(content_type.into());
                self
            }

            /// Clear the content type so the transport or default one applies.
            #[must_use]
            pub fn without_content_type(mut self) -> Self {
                self.content_type = None;
                self
            }
        }
    };
}

impl_envelope_setters!(Envelope);
impl_envelope_setters!(DataEnvelope<T>);

impl Envelope {
    /// Empty success envelope with the default JSON content type.
    #[must_use]
    pub const fn new() -> Self {
        Self::constant(DEFAULT_CODE, DEFAULT_TITLE)
    }

    const fn constant(code: i32, title: &'static str) -> Self {
        Self {
            code,
            title: Cow::Borrowed(title),
            detail: None,
            status_code: None,
            content_type: Some(Cow::Borrowed(DEFAULT_CONTENT_TYPE)),
        }
    }

    /// Envelope with a custom code, title and detail.
    #[must_use]
    pub fn with_parts(
        code: i32,
        title: impl Into<Cow<'static, str>>,
        detail: Option<Cow<'static, str>>,
    ) -> Self {
        Self {
            code,
            title: title.into(),
            detail,
            ..Self::new()
        }
    }

    /// Empty success envelope.
    #[must_use]
    pub const fn ok() -> Self {
        Self::new()
    }

    /// Empty success envelope rendered as JSON.
    #[must_use]
    pub const fn json() -> Self {
        Self::new()
    }

    /// Empty success envelope rendered as XML.
    #[must_use]
    pub fn xml() -> Self {
        Self::new().with_content_type(XML_CONTENT_TYPE)
    }

    /// Failure with code -1 and transport status 200.
    #[must_use]
    pub fn fail(title: impl Into<Cow<'static, str>>) -> Self {
        Self::fail_with(FAIL_CODE, title, 200)
    }

    /// Fully custom failure.
    #[must_use]
    pub fn fail_with(code: i32, title: impl Into<Cow<'static, str>>, status_code: u16) -> Self {
        Self::with_parts(code, title, None).with_status_code(status_code)
    }

    /// Failure whose title is the error's display text.
    #[must_use]
    pub fn from_error(error: &(dyn Error + '_), code: i32) -> Self {
        Self::with_parts(code, error.to_string(), None)
    }

    /// Failure with status 400 and code -1.
    #[must_use]
    pub fn bad_request(title: impl Into<Cow<'static, str>>) -> Self {
        Self::fail_with(FAIL_CODE, title, 400)
    }

    /// Failure with status 401 and code -1.
    #[must_use]
    pub fn unauthorized(title: impl Into<Cow<'static, str>>) -> Self {
        Self::fail_with(FAIL_CODE, title, 401)
    }

    /// Failure with status 403 and code -1.
    #[must_use]
    pub fn forbidden(title: impl Into<Cow<'static, str>>) -> Self {
        Self::fail_with(FAIL_CODE, title, 403)
    }

    /// Failure with status 500 and code -1.
    #[must_use]
    pub fn server_error(title: impl Into<Cow<'static, str>>) -> Self {
        Self::fail_with(FAIL_CODE, title, 500)
    }

    /// Widen into a [`DataEnvelope`] of any payload type.
    ///
    /// Copies code, title, detail, status code and content type; `data` is unset.
    #[must_use]
    pub fn widen<T>(self) -> DataEnvelope<T> {
        DataEnvelope {
            code: self.code,
            title: self.title,
            detail: self.detail,
            data: None,
            status_code: self.status_code,
            content_type: self.content_type,
        }
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Envelope> for DataEnvelope<T> {
    fn from(envelope: Envelope) -> Self {
        envelope.widen()
    }
}

impl<T> DataEnvelope<T> {
    /// Success envelope carrying `data`, with transport status 200.
    #[must_use]
    pub fn new(data: T) -> Self {
        Self::with_parts(DEFAULT_CODE, DEFAULT_TITLE, Some(200), None, Some(data))
    }

    /// Success envelope carrying `data`.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self::new(data)
    }

    /// Envelope with no payload and no status override.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_parts(DEFAULT_CODE, DEFAULT_TITLE, None, None, None)
    }

    /// Empty envelope rendered as JSON.
    #[must_use]
    pub fn json() -> Self {
        Self::empty()
    }

    /// Empty envelope rendered as XML.
    #[must_use]
    pub fn xml() -> Self {
        Self::empty().with_content_type(XML_CONTENT_TYPE)
    }

    /// Fully custom envelope.
    #[must_use]
    pub fn with_parts(
        code: i32,
        title: impl Into<Cow<'static, str>>,
        status_code: Option<u16>,
        detail: Option<Cow<'static, str>>,
        data: Option<T>,
    ) -> Self {
        Self {
            code,
            title: title.into(),
            detail,
            data,
            status_code,
            content_type: Some(Cow::Borrowed(DEFAULT_CONTENT_TYPE)),
        }
    }

    /// Failure with code -1 and transport status 200.
    #[must_use]
    pub fn fail(title: impl Into<Cow<'static, str>>) -> Self {
        Self::fail_with(FAIL_CODE, title, 200)
    }

    /// Fully custom failure without payload.
    #[must_use]
    pub fn fail_with(code: i32, title: impl Into<Cow<'static, str>>, status_code: u16) -> Self {
        Self::with_parts(code, title, Some(status_code), None, None)
    }

    /// Failure whose title is the error's display text.
    #[must_use]
    pub fn from_error(error: &(dyn Error + '_), code: i32) -> Self {
        Self::with_parts(code, error.to_string(), None, None, None)
    }

    /// Set the payload.
    #[must_use]
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Clear the payload.
    #[must_use]
    pub fn without_data(mut self) -> Self {
        self.data = None;
        self
    }

    /// Consume the envelope, returning the payload.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl DataEnvelope<ValidationErrors> {
    /// Validation failure: code 400000, status 400, the errors as payload.
    #[must_use]
    pub fn validation_failed(errors: ValidationErrors) -> Self {
        Self::validation_failed_with(errors, VALIDATION_TITLE, VALIDATION_CODE)
    }

    /// Validation failure with a custom title and code.
    #[must_use]
    pub fn validation_failed_with(
        errors: ValidationErrors,
        title: impl Into<Cow<'static, str>>,
        code: i32,
    ) -> Self {
        Self::with_parts(code, title, Some(400), None, Some(errors))
    }
}

impl<T> Default for DataEnvelope<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl Outcome for Envelope {
    type Data = ();

    fn code(&self) -> i32 {
        self.code
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    fn data(&self) -> Option<&()> {
        None
    }

    fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

impl<T> Outcome for DataEnvelope<T> {
    type Data = T;

    fn code(&self) -> i32 {
        self.code
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    fn data(&self) -> Option<&T> {
        if payload_is_absent(&self.data) {
            None
        } else {
            self.data.as_ref()
        }
    }

    fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}
