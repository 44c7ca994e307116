//! Envelope to XML document serialization.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use resultkit_model::{Outcome, PayloadKind, XmlPayload};
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use crate::error::XmlError;

/// Name of the document root element.
pub const ROOT_ELEMENT: &str = "ApiResult";

/// XML Schema instance namespace declared on the root element.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// XML Schema namespace declared on the root element.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

const DATA_ELEMENT: &str = "Data";

/// Serialize an envelope as a complete `ApiResult` XML document.
///
/// The payload shape is checked first: an envelope whose payload type is a
/// keyed collection fails with [`XmlError::UnsupportedPayload`] whether or
/// not a payload is present, and nothing is written.
///
/// # Errors
///
/// Returns `XmlError` if the payload shape is unsupported or serialization fails.
pub fn to_xml<O>(outcome: &O) -> Result<Vec<u8>, XmlError>
where
    O: Outcome + ?Sized,
    O::Data: Serialize + XmlPayload,
{
    ensure_structured::<O::Data>()?;

    let data = outcome.data().map(write_data).transpose()?;

    let mut buf = Vec::with_capacity(256);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    writer
        .create_element(ROOT_ELEMENT)
        .with_attribute(("xmlns:xsi", XSI_NAMESPACE))
        .with_attribute(("xmlns:xsd", XSD_NAMESPACE))
        .write_inner_content(|w| {
            write_text_element(w, "Code", &outcome.code().to_string())?;
            write_text_element(w, "Title", outcome.title())?;
            if let Some(detail) = outcome.detail() {
                write_text_element(w, "Detail", detail)?;
            }
            if let Some(ref data) = data {
                w.get_mut().write_all(data.as_bytes())?;
            }
            Ok(())
        })?;

    Ok(buf)
}

fn ensure_structured<T: XmlPayload>() -> Result<(), XmlError> {
    match T::KIND {
        PayloadKind::Structured => Ok(()),
        PayloadKind::KeyedCollection => {
            let type_name = std::any::type_name::<T>();
            tracing::error!(payload_type = type_name, "cannot serialize keyed-collection payload to XML");
            Err(XmlError::UnsupportedPayload { type_name })
        }
    }
}

/// Render the payload as a single `<Data>` element.
///
/// Sequences become one child element per item, so a present but empty
/// list still yields `<Data/>`.
fn write_data<T: Serialize + XmlPayload>(data: &T) -> Result<String, XmlError> {
    let rendered = match T::item_element_name() {
        Some(item) => quick_xml::se::to_string_with_root(DATA_ELEMENT, &Items { item, items: data }),
        None => quick_xml::se::to_string_with_root(DATA_ELEMENT, data),
    };
    rendered.map_err(|e| XmlError::Payload(e.to_string()))
}

/// A sequence payload viewed as a record with one repeated field.
struct Items<'a, T: ?Sized> {
    item: &'static str,
    items: &'a T,
}

impl<T: Serialize + ?Sized> Serialize for Items<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct(DATA_ELEMENT, 1)?;
        record.serialize_field(self.item, self.items)?;
        record.end()
    }
}

/// Write a simple `<tag>text</tag>` element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}
