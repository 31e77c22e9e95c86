//! Decoding of Firestore REST typed values into plain JSON.
//!
//! Firestore wraps every field in a single-key object naming its type
//! (`{"stringValue": "x"}`, `{"integerValue": "42"}`, ...). Decoding strips
//! that wrapper so documents can be deserialized with plain serde types.

use serde_json::{Map, Number, Value};

/// Decode a Firestore `fields` map into a JSON object.
///
/// Null fields are left out, so they read the same as absent ones and pick
/// up their serde defaults.
pub(crate) fn decode_fields(fields: &Map<String, Value>) -> Value {
    Value::Object(
        fields
            .iter()
            .map(|(k, v)| (k.clone(), decode_value(v)))
            .filter(|(_, v)| !v.is_null())
            .collect(),
    )
}

/// Decode one typed value. Unknown or malformed wrappers decode to `null`.
pub(crate) fn decode_value(value: &Value) -> Value {
    let Some(obj) = value.as_object() else {
        return Value::Null;
    };
    let Some((kind, inner)) = obj.iter().next() else {
        return Value::Null;
    };

    match kind.as_str() {
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" | "booleanValue"
        | "geoPointValue" => inner.clone(),
        "nullValue" => Value::Null,
        // 64-bit integers travel as strings.
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(|n| Value::Number(n.into()))
                .unwrap_or(Value::Null),
            Value::Number(_) => inner.clone(),
            _ => Value::Null,
        },
        "doubleValue" => decode_double(inner),
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        "mapValue" => inner
            .get("fields")
            .and_then(Value::as_object)
            .map_or_else(|| Value::Object(Map::new()), decode_fields),
        _ => Value::Null,
    }
}

/// Whole doubles become integers so counts stored as doubles still fit `u64`
/// fields.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn decode_double(inner: &Value) -> Value {
    let Some(f) = inner.as_f64() else {
        return Value::Null;
    };
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        return Value::Number((f as i64).into());
    }
    Number::from_f64(f).map_or(Value::Null, Value::Number)
}
