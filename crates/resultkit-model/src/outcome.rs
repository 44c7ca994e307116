//! Read-only view of an envelope consumed by the executor.

/// Accessors shared by every envelope shape.
///
/// The executor only ever reads an outcome; it never mutates it. Implemented
/// for [`Envelope`](crate::Envelope), [`DataEnvelope`](crate::DataEnvelope)
/// and for shared references to any outcome, so the process-wide singletons
/// can be dispatched without cloning.
pub trait Outcome {
    /// Payload type. `()` for envelopes that carry no payload.
    type Data;

    /// Business result code.
    fn code(&self) -> i32;

    /// Short human-readable summary.
    fn title(&self) -> &str;

    /// Long-form explanation, if any.
    fn detail(&self) -> Option<&str>;

    /// Payload, if any.
    fn data(&self) -> Option<&Self::Data>;

    /// Transport status code override.
    fn status_code(&self) -> Option<u16>;

    /// Content type carried on the envelope.
    fn content_type(&self) -> Option<&str>;
}

impl<O: Outcome + ?Sized> Outcome for &O {
    type Data = O::Data;

    fn code(&self) -> i32 {
        (**self).code()
    }

    fn title(&self) -> &str {
        (**self).title()
    }

    fn detail(&self) -> Option<&str> {
        (**self).detail()
    }

    fn data(&self) -> Option<&Self::Data> {
        (**self).data()
    }

    fn status_code(&self) -> Option<u16> {
        (**self).status_code()
    }

    fn content_type(&self) -> Option<&str> {
        (**self).content_type()
    }
}
