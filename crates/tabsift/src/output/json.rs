//! Conversion of values into JSON-safe form.
//!
//! Every implementation maps non-finite floats and missing cells to `null`
//! and keeps mapping key order. `serde_json::Value` converts to itself, which
//! makes the conversion idempotent.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde_json::{Map, Number, Value as JsonValue};

use crate::schema::Value;

/// Conversion into canonical JSON.
pub trait ToJson {
    fn to_json(&self) -> JsonValue;
}

/// Convert any supported value into canonical JSON.
pub fn make_json_safe<T: ToJson + ?Sized>(value: &T) -> JsonValue {
    value.to_json()
}

fn float_to_json(f: f64) -> JsonValue {
    Number::from_f64(f).map(JsonValue::Number).unwrap_or(JsonValue::Null)
}

impl ToJson for JsonValue {
    fn to_json(&self) -> JsonValue {
        match self {
            JsonValue::Array(items) => JsonValue::Array(items.iter().map(ToJson::to_json).collect()),
            JsonValue::Object(fields) => JsonValue::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}

impl ToJson for Value {
    fn to_json(&self) -> JsonValue {
        match self {
            Value::Missing => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(i) => JsonValue::from(*i),
            Value::Float(f) => float_to_json(*f),
            Value::Text(s) => JsonValue::String(s.clone()),
        }
    }
}

impl ToJson for bool {
    fn to_json(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }
}

macro_rules! int_to_json {
    ($($t:ty),*) => {
        $(
            impl ToJson for $t {
                fn to_json(&self) -> JsonValue {
                    JsonValue::from(*self)
                }
            }
        )*
    };
}

int_to_json!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToJson for f64 {
    fn to_json(&self) -> JsonValue {
        float_to_json(*self)
    }
}

impl ToJson for f32 {
    fn to_json(&self) -> JsonValue {
        float_to_json(f64::from(*self))
    }
}

impl ToJson for str {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.to_string())
    }
}

impl ToJson for String {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

impl<T: ToJson + ?Sized> ToJson for &T {
    fn to_json(&self) -> JsonValue {
        (**self).to_json()
    }
}

impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> JsonValue {
        match self {
            Some(v) => v.to_json(),
            None => JsonValue::Null,
        }
    }
}

impl<T: ToJson> ToJson for [T] {
    fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> JsonValue {
        self.as_slice().to_json()
    }
}

impl<T: ToJson, const N: usize> ToJson for [T; N] {
    fn to_json(&self) -> JsonValue {
        self.as_slice().to_json()
    }
}

impl<K: AsRef<str>, V: ToJson> ToJson for IndexMap<K, V> {
    fn to_json(&self) -> JsonValue {
        let fields: Map<String, JsonValue> = self
            .iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.to_json()))
            .collect();
        JsonValue::Object(fields)
    }
}

impl<K: AsRef<str>, V: ToJson> ToJson for BTreeMap<K, V> {
    fn to_json(&self) -> JsonValue {
        let fields: Map<String, JsonValue> = self
            .iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.to_json()))
            .collect();
        JsonValue::Object(fields)
    }
}
