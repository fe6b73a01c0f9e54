//! JSON <-> Value conversion

use crate::error::*;
use crate::types::*;
use serde::Serialize;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

/// Largest integer an `f64` holds exactly (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Convert JSON value to Value
pub fn from_json(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
        JsonValue::String(s) => Value::Str(s.clone()),
        JsonValue::Array(arr) => Value::List(arr.iter().map(from_json).collect()),
        JsonValue::Object(obj) => Value::Map(
            obj.iter()
                .map(|(k, v)| (k.clone(), from_json(v)))
                .collect(),
        ),
    }
}

/// Convert Value to JSON value
///
/// Integral numbers become JSON integers so they print without a fractional
/// part. Non-finite numbers have no JSON form and fail.
pub fn to_json(v: &Value) -> Result<JsonValue> {
    match v {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::Number(n) => json_number(*n).map(JsonValue::Number),
        Value::Str(s) => Ok(JsonValue::String(s.clone())),
        Value::List(items) => items
            .iter()
            .map(to_json)
            .collect::<Result<Vec<_>>>()
            .map(JsonValue::Array),
        Value::Map(entries) => {
            let mut map = JsonMap::new();
            for (key, value) in entries {
                map.insert(key.clone(), to_json(value)?);
            }
            Ok(JsonValue::Object(map))
        }
    }
}

/// Convert any serializable value into a Value
///
/// Types serde_json cannot represent (maps with non-string keys, for
/// instance) fail with `UnsupportedType`.
pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map(|json| from_json(&json))
        .map_err(|e| CodecError::UnsupportedType(e.to_string()))
}

/// Parse JSON string to Value
pub fn parse_json(json_str: &str) -> Result<Value> {
    let json: JsonValue =
        serde_json::from_str(json_str).map_err(|e| CodecError::Decoding(e.to_string()))?;
    Ok(from_json(&json))
}

/// Stringify Value to compact JSON string
pub fn stringify_json(v: &Value) -> Result<String> {
    serde_json::to_string(&to_json(v)?).map_err(|e| CodecError::Serialization(e.to_string()))
}

fn json_number(n: f64) -> Result<Number> {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        // -0.0 lands here too and prints as 0
        return Ok(Number::from(n as i64));
    }
    Number::from_f64(n)
        .ok_or_else(|| CodecError::Serialization(format!("number {n} has no JSON representation")))
}
