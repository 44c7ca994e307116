//! JSON rendering of envelopes under a configurable naming policy.

use resultkit_core::JsonNamingPolicy;
use resultkit_model::Outcome;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Serializable view of an outcome with envelope field names cased per policy.
///
/// Fields are written in the order `code`, `title`, `detail`, `data`;
/// `detail` and `data` are skipped when absent. The payload is serialized
/// with its own serde attributes.
#[derive(Debug)]
pub struct JsonEnvelope<'a, O: ?Sized> {
    outcome: &'a O,
    naming: JsonNamingPolicy,
}

impl<'a, O: ?Sized> JsonEnvelope<'a, O> {
    /// Wrap an outcome.
    #[must_use]
    pub fn new(outcome: &'a O, naming: JsonNamingPolicy) -> Self {
        Self { outcome, naming }
    }
}

impl<O> Serialize for JsonEnvelope<'_, O>
where
    O: Outcome + ?Sized,
    O::Data: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let outcome = self.outcome;
        let detail = outcome.detail();
        let data = outcome.data();
        let len = 2 + usize::from(detail.is_some()) + usize::from(data.is_some());

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(self.naming.field_name("code"), &outcome.code())?;
        map.serialize_entry(self.naming.field_name("title"), outcome.title())?;
        if let Some(detail) = detail {
            map.serialize_entry(self.naming.field_name("detail"), detail)?;
        }
        if let Some(data) = data {
            map.serialize_entry(self.naming.field_name("data"), data)?;
        }
        map.end()
    }
}

/// Serialize an outcome to JSON bytes.
pub fn to_json<O>(
    outcome: &O,
    naming: JsonNamingPolicy,
    pretty: bool,
) -> Result<Vec<u8>, serde_json::Error>
where
    O: Outcome + ?Sized,
    O::Data: Serialize,
{
    let view = JsonEnvelope::new(outcome, naming);
    if pretty {
        serde_json::to_vec_pretty(&view)
    } else {
        serde_json::to_vec(&view)
    }
}

#[cfg(test)]
mod tests {
    use resultkit_model::{DataEnvelope, EMPTY_SUCCESS, Envelope, GENERIC_FAILURE, ValidationErrors};

    use super::*;

    fn camel<O>(outcome: &O) -> String
    where
        O: Outcome,
        O::Data: Serialize,
    {
        String::from_utf8(to_json(outcome, JsonNamingPolicy::CamelCase, false).unwrap()).unwrap()
    }

    #[derive(serde::Serialize)]
    struct User {
        id: u64,
        tags: Vec<String>,
        manager: Option<Box<User>>,
    }

    #[test]
    fn test_should_render_canonical_wire_format() {
        assert_eq!(
            camel(&DataEnvelope::ok("success")),
            r#"{"code":0,"title":"OK","data":"success"}"#
        );
        assert_eq!(camel(&EMPTY_SUCCESS), r#"{"code":0,"title":"OK"}"#);
        assert_eq!(camel(&GENERIC_FAILURE), r#"{"code":-1,"title":"request fail"}"#);
    }

    #[test]
    fn test_should_emit_detail_only_when_set() {
        assert!(!camel(&Envelope::new()).contains("detail"));
        assert_eq!(
            camel(&Envelope::new().with_detail("")),
            r#"{"code":0,"title":"OK","detail":""}"#
        );
        assert_eq!(
            camel(&DataEnvelope::ok(1).with_detail("why")),
            r#"{"code":0,"title":"OK","detail":"why","data":1}"#
        );
    }

    #[test]
    fn test_should_omit_unset_data() {
        assert_eq!(
            camel(&DataEnvelope::<Vec<u8>>::fail("nope")),
            r#"{"code":-1,"title":"nope"}"#
        );
        assert_eq!(camel(&DataEnvelope::ok(())), r#"{"code":0,"title":"OK"}"#);
    }

    #[test]
    fn test_should_apply_pascal_case_policy() {
        let json = to_json(&DataEnvelope::ok("success"), JsonNamingPolicy::PascalCase, false).unwrap();
        assert_eq!(
            std::str::from_utf8(&json).unwrap(),
            r#"{"Code":0,"Title":"OK","Data":"success"}"#
        );
    }

    #[test]
    fn test_should_pretty_print_when_requested() {
        let json = to_json(&EMPTY_SUCCESS, JsonNamingPolicy::CamelCase, true).unwrap();
        assert_eq!(
            std::str::from_utf8(&json).unwrap(),
            "{\n  \"code\": 0,\n  \"title\": \"OK\"\n}"
        );
    }

    #[test]
    fn test_should_serialize_nested_payloads() {
        let user = User {
            id: 2,
            tags: vec!["a".to_owned()],
            manager: Some(Box::new(User {
                id: 1,
                tags: vec![],
                manager: None,
            })),
        };
        let value: serde_json::Value = serde_json::from_str(&camel(&DataEnvelope::ok(user))).unwrap();
        assert_eq!(value["data"]["manager"]["id"], 1);
        assert_eq!(value["data"]["tags"][0], "a");
    }

    #[test]
    fn test_should_include_validation_map_verbatim() {
        let errors = ValidationErrors::new()
            .with_error("name", "required")
            .with_error("name", "too short")
            .with_error("age", "required");
        let value: serde_json::Value =
            serde_json::from_str(&camel(&DataEnvelope::validation_failed(errors))).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "code": 400_000,
                "title": "One or more validation errors occurred.",
                "data": {"name": ["required", "too short"], "age": ["required"]},
            })
        );
    }
}
