//! Decoding of Firestore's typed REST value encoding into plain JSON.
//!
//! The REST API wraps every field in a single-key object naming its type,
//! e.g. `{"stringValue": "tok-123"}` or `{"integerValue": "42"}`.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use notify_core::types::fields::FieldSet;

/// A Firestore document as returned by `documents.get`.
#[derive(Debug, Clone, Deserialize)]
pub struct FirestoreDocument {
    /// Fully qualified resource name.
    #[serde(default)]
    pub name: String,
    /// Typed document fields; absent for an empty document.
    #[serde(default)]
    pub fields: BTreeMap<String, FirestoreValue>,
}

impl FirestoreDocument {
    /// Convert the typed fields into a plain field set.
    pub fn into_field_set(self) -> FieldSet {
        self.fields
            .into_iter()
            .map(|(k, v)| (k, v.into_json()))
            .collect()
    }
}

/// One typed Firestore value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FirestoreValue {
    /// `null`; the payload is always `"NULL_VALUE"`.
    NullValue(Value),
    /// Boolean.
    BooleanValue(bool),
    /// 64-bit integer, transmitted as a decimal string.
    IntegerValue(String),
    /// Double.
    DoubleValue(f64),
    /// RFC 3339 timestamp.
    TimestampValue(String),
    /// UTF-8 string.
    StringValue(String),
    /// Base64-encoded bytes.
    BytesValue(String),
    /// Reference to another document.
    ReferenceValue(String),
    /// Latitude/longitude pair.
    GeoPointValue(GeoPoint),
    /// Array of values.
    ArrayValue(ArrayValue),
    /// Nested map of values.
    MapValue(MapValue),
}

/// Firestore geo point.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    #[serde(default)]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(default)]
    pub longitude: f64,
}

/// Firestore array wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrayValue {
    /// Elements; absent for an empty array.
    #[serde(default)]
    pub values: Vec<FirestoreValue>,
}

/// Firestore map wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct MapValue {
    /// Entries; absent for an empty map.
    #[serde(default)]
    pub fields: BTreeMap<String, FirestoreValue>,
}

impl FirestoreValue {
    /// Convert into the equivalent plain JSON value.
    pub fn into_json(self) -> Value {
        match self {
            Self::NullValue(_) => Value::Null,
            Self::BooleanValue(b) => Value::Bool(b),
            Self::IntegerValue(s) => match s.parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::String(s),
            },
            Self::DoubleValue(d) => Value::from(d),
            Self::TimestampValue(s)
            | Self::StringValue(s)
            | Self::BytesValue(s)
            | Self::ReferenceValue(s) => Value::String(s),
            Self::GeoPointValue(p) => {
                let mut map = Map::new();
                map.insert("latitude".to_string(), Value::from(p.latitude));
                map.insert("longitude".to_string(), Value::from(p.longitude));
                Value::Object(map)
            }
            Self::ArrayValue(a) => {
                Value::Array(a.values.into_iter().map(Self::into_json).collect())
            }
            Self::MapValue(m) => Value::Object(
                m.fields
                    .into_iter()
                    .map(|(k, v)| (k, v.into_json()))
                    .collect(),
            ),
        }
    }
}
