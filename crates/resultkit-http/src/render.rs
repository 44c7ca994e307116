//! Type-erased envelopes returned by endpoint handlers.

use std::future::Future;
use std::pin::Pin;

use resultkit_model::{Outcome, XmlPayload};
use serde::Serialize;

use crate::error::DispatchError;
use crate::executor::ResultExecutor;
use crate::sink::BufferedSink;

/// Future returned by [`Render::render`].
pub type RenderFuture<'a> = Pin<Box<dyn Future<Output = Result<(), DispatchError>> + Send + 'a>>;

/// Anything the executor can write to a [`BufferedSink`].
///
/// Implemented for every [`Outcome`] whose payload is serializable, so
/// handlers can return envelopes of different payload types behind one
/// [`Reply`].
pub trait Render: Send + Sync {
    /// Dispatch `self` through `executor` into `sink`.
    fn render<'a>(&'a self, executor: &'a ResultExecutor, sink: &'a mut BufferedSink)
    -> RenderFuture<'a>;
}

impl<O> Render for O
where
    O: Outcome + Send + Sync,
    O::Data: Serialize + XmlPayload,
{
    fn render<'a>(
        &'a self,
        executor: &'a ResultExecutor,
        sink: &'a mut BufferedSink,
    ) -> RenderFuture<'a> {
        Box::pin(executor.execute(self, sink))
    }
}

/// Boxed envelope produced by an endpoint handler.
pub type Reply = Box<dyn Render>;

/// Box an envelope into a [`Reply`].
pub fn reply<R: Render + 'static>(outcome: R) -> Reply {
    Box::new(outcome)
}

#[cfg(test)]
mod tests {
    use resultkit_model::{DataEnvelope, Envelope, ValidationErrors};

    use super::*;

    #[tokio::test]
    async fn test_should_render_heterogeneous_replies() {
        let replies: Vec<Reply> = vec![
            reply(Envelope::new()),
            reply(DataEnvelope::ok(42_u32)),
            reply(DataEnvelope::validation_failed(
                ValidationErrors::new().with_error("name", "required"),
            )),
        ];
        let executor = ResultExecutor::default();

        let mut bodies = Vec::new();
        for r in &replies {
            let mut sink = BufferedSink::new();
            r.render(&executor, &mut sink).await.unwrap();
            bodies.push(String::from_utf8(sink.body().to_vec()).unwrap());
        }

        assert_eq!(bodies[0], r#"{"code":0,"title":"OK"}"#);
        assert_eq!(bodies[1], r#"{"code":0,"title":"OK","data":42}"#);
        assert_eq!(
            bodies[2],
            r#"{"code":400000,"title":"One or more validation errors occurred.","data":{"name":["required"]}}"#
        );
    }
}
