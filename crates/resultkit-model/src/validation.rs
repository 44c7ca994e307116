//! Field-level validation errors carried by validation-failure envelopes.

use indexmap::IndexMap;
use indexmap::map as index_map;
use serde::{Deserialize, Serialize};

use crate::payload::{PayloadKind, XmlPayload};

/// Mapping from field name to the ordered error messages reported for it.
///
/// Serializes as a plain JSON object (`{"name":["required"]}`). Fields keep
/// the order in which they were first reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(IndexMap<String, Vec<String>>);

impl ValidationErrors {
    /// Create an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field, creating the field entry if needed.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Builder form of [`add`](Self::add).
    #[must_use]
    pub fn with_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Append several messages to a field. Empty message lists are ignored.
    pub fn extend_field<I, M>(&mut self, field: impl Into<String>, messages: I)
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        let mut messages = messages.into_iter().map(Into::into).peekable();
        if messages.peek().is_none() {
            return;
        }
        self.0.entry(field.into()).or_default().extend(messages);
    }

    /// Messages reported for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Number of fields with at least one error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(field, messages)` pairs.
    pub fn iter(&self) -> index_map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }

    /// Consume the map, returning the underlying field map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.0
    }
}

impl XmlPayload for ValidationErrors {
    const KIND: PayloadKind = PayloadKind::KeyedCollection;
}

impl From<IndexMap<String, Vec<String>>> for ValidationErrors {
    fn from(map: IndexMap<String, Vec<String>>) -> Self {
        Self(map.into_iter().filter(|(_, v)| !v.is_empty()).collect())
    }
}

/// Collects `(field, messages)` pairs, skipping fields without messages.
impl<F, I, M> FromIterator<(F, I)> for ValidationErrors
where
    F: Into<String>,
    I: IntoIterator<Item = M>,
    M: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (F, I)>>(iter: T) -> Self {
        let mut errors = Self::new();
        for (field, messages) in iter {
            errors.extend_field(field, messages);
        }
        errors
    }
}

impl IntoIterator for ValidationErrors {
    type Item = (String, Vec<String>);
    type IntoIter = index_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = index_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_accumulate_messages_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "required");
        errors.add("name", "too short");
        errors.add("age", "required");

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("name"),
            Some(&["required".to_owned(), "too short".to_owned()][..])
        );
        assert_eq!(errors.get("age"), Some(&["required".to_owned()][..]));
        assert_eq!(errors.get("email"), None);
    }

    #[test]
    fn test_should_skip_fields_without_messages() {
        let errors: ValidationErrors = vec![
            ("name", vec!["required"]),
            ("email", vec![]),
            ("age", vec!["required"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(errors.len(), 2);
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn test_should_serialize_as_plain_object() {
        let errors = ValidationErrors::new()
            .with_error("name", "required")
            .with_error("age", "required");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"name":["required"],"age":["required"]}"#);

        let parsed: ValidationErrors = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, errors);
    }

    #[test]
    fn test_should_keep_first_reported_field_order() {
        let errors = ValidationErrors::new()
            .with_error("zip", "invalid")
            .with_error("age", "required")
            .with_error("zip", "too long");

        let fields: Vec<&str> = errors.iter().map(|(field, _)| field.as_str()).collect();
        assert_eq!(fields, ["zip", "age"]);
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"zip":["invalid","too long"],"age":["required"]}"#
        );
    }

    #[test]
    fn test_should_drop_empty_entries_from_map() {
        let mut map = IndexMap::new();
        map.insert("name".to_owned(), vec!["required".to_owned()]);
        map.insert("email".to_owned(), Vec::new());

        let errors = ValidationErrors::from(map);
        assert_eq!(errors.len(), 1);
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn test_should_be_tagged_as_keyed_collection() {
        assert_eq!(ValidationErrors::KIND, PayloadKind::KeyedCollection);
    }
}
