//! Payload shape tags used by the XML writer.
//!
//! The XML layer can express structured values (scalars, records, sequences)
//! but not open-ended key/value maps. Rather than probing values at runtime,
//! each payload type declares its [`PayloadKind`] once through
//! [`XmlPayload::KIND`].
//!
//! Sequences are written as one element per item. Items are named after
//! their type (`string`, `int`, `User`, ...) unless the impl overrides
//! [`XmlPayload::element_name`].
//!
//! Record types opt in with an empty impl:
//!
//! ```
//! use resultkit_model::XmlPayload;
//!
//! #[derive(serde::Serialize)]
//! struct User {
//!     name: String,
//! }
//!
//! impl XmlPayload for User {}
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Shape of a payload type as seen by the XML writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// Scalars, records and sequences of structured values.
    Structured,
    /// Open-ended key/value maps. Not expressible as XML.
    KeyedCollection,
}

/// Declares the XML shape of a payload type.
pub trait XmlPayload {
    /// The payload's shape. Defaults to [`PayloadKind::Structured`].
    const KIND: PayloadKind = PayloadKind::Structured;

    /// Element name of a value of this type when it is a sequence item.
    ///
    /// Defaults to the type's name without module path or generics.
    fn element_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Element name of this type's items, if it is a sequence.
    fn item_element_name() -> Option<&'static str> {
        None
    }
}

/// `a::b::Name<c::D>` -> `Name`.
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

macro_rules! impl_structured {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl XmlPayload for $ty {
                fn element_name() -> &'static str {
                    $name
                }
            }
        )+
    };
}

impl_structured!(
    () => "anyType",
    bool => "boolean",
    char => "char",
    i8 => "byte",
    i16 => "short",
    i32 => "int",
    i64 => "long",
    i128 => "integer",
    isize => "long",
    u8 => "unsignedByte",
    u16 => "unsignedShort",
    u32 => "unsignedInt",
    u64 => "unsignedLong",
    u128 => "nonNegativeInteger",
    usize => "unsignedLong",
    f32 => "float",
    f64 => "double",
    str => "string",
    String => "string",
);

macro_rules! impl_transparent {
    ($ty:ty) => {
        const KIND: PayloadKind = <$ty>::KIND;

        fn element_name() -> &'static str {
            <$ty>::element_name()
        }

        fn item_element_name() -> Option<&'static str> {
            <$ty>::item_element_name()
        }
    };
}

impl<T: XmlPayload + ?Sized> XmlPayload for &T {
    impl_transparent!(T);
}

impl<T: XmlPayload + ?Sized> XmlPayload for Box<T> {
    impl_transparent!(T);
}

impl<'a, T: XmlPayload + ToOwned + ?Sized + 'a> XmlPayload for Cow<'a, T> {
    impl_transparent!(T);
}

impl<T: XmlPayload> XmlPayload for Option<T> {
    impl_transparent!(T);
}

impl<T: XmlPayload> XmlPayload for Vec<T> {
    const KIND: PayloadKind = T::KIND;

    fn element_name() -> &'static str {
        "Array"
    }

    fn item_element_name() -> Option<&'static str> {
        Some(T::element_name())
    }
}

impl<T: XmlPayload> XmlPayload for [T] {
    const KIND: PayloadKind = T::KIND;

    fn element_name() -> &'static str {
        "Array"
    }

    fn item_element_name() -> Option<&'static str> {
        Some(T::element_name())
    }
}

impl<K, V, S> XmlPayload for HashMap<K, V, S> {
    const KIND: PayloadKind = PayloadKind::KeyedCollection;
}

impl<K, V> XmlPayload for BTreeMap<K, V> {
    const KIND: PayloadKind = PayloadKind::KeyedCollection;
}
