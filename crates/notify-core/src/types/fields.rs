//! Document field sets as delivered by the document store.

use serde_json::{Map, Value};

/// A document's fields, keyed by field name.
pub type FieldSet = Map<String, Value>;

/// Read a string field, treating absent, non-string, and empty values alike.
pub fn non_empty_str<'a>(fields: &'a FieldSet, key: &str) -> Option<&'a str> {
    match fields.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}
