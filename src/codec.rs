//! Tagged value encoding
//!
//! Booleans and numbers are turned into tagged strings so they survive
//! transports that only carry strings (URL query parameters, form fields).
//!
//! ```text
//! "WOW" => "WOW"
//! 3     => "num!3"
//! true  => "bool!1"
//! ```
//!
//! Strings are never re-tagged, so a raw string such as `"num!5"` decodes to
//! the number 5. That collision is inherent to the format.

use crate::error::*;
use crate::path::{expand, flatten};
use crate::types::*;
use tracing::{debug, trace};

/// Tag prefix for booleans
pub const BOOL_TAG: &str = "bool!";
/// Tag prefix for numbers
pub const NUM_TAG: &str = "num!";

/// Encode a value into its tagged string-safe form
pub fn encode(value: &Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Bool(b) => Ok(Value::Str(encode_bool(*b))),
        Value::Number(n) => encode_number(*n).map(Value::Str),
        Value::Str(s) => Ok(Value::Str(s.clone())),
        Value::List(items) => {
            trace!(len = items.len(), "encoding list");
            items.iter().map(encode).collect::<Result<Vec<_>>>().map(Value::List)
        }
        Value::Map(entries) => {
            trace!(len = entries.len(), "encoding map");
            encode_entries(entries).map(Value::Map)
        }
    }
}

/// Decode a tagged value back into its original form
pub fn decode(value: &Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Str(s) => decode_str(s),
        Value::List(items) => items.iter().map(decode).collect::<Result<Vec<_>>>().map(Value::List),
        Value::Map(entries) => decode_entries(entries).map(Value::Map),
        Value::Bool(_) | Value::Number(_) => {
            debug!(kind = value.type_name(), "refusing to decode untagged leaf");
            Err(CodecError::InvalidEncoding(format!(
                "expected a string, list or map, got {}",
                value.type_name()
            )))
        }
    }
}

/// Flatten a nested map into dot paths and encode every leaf
///
/// ```text
/// { id: 1, user: { admin: true } } => { "id": "num!1", "user.admin": "bool!1" }
/// ```
pub fn encode_object(obj: &Map) -> Result<Map> {
    encode_entries(&flatten(obj))
}

/// Decode every leaf of a flat path map and expand it back into nested maps
pub fn decode_object(flat: &Map) -> Result<Map> {
    decode_entries(flat).map(|decoded| expand(&decoded))
}

// ============================================================
// Internal helpers
// ============================================================

fn encode_entries(entries: &Map) -> Result<Map> {
    entries
        .iter()
        .map(|(k, v)| Ok((k.clone(), encode(v)?)))
        .collect()
}

fn decode_entries(entries: &Map) -> Result<Map> {
    entries
        .iter()
        .map(|(k, v)| Ok((k.clone(), decode(v)?)))
        .collect()
}

fn encode_bool(b: bool) -> String {
    format!("{BOOL_TAG}{}", if b { '1' } else { '0' })
}

fn encode_number(n: f64) -> Result<String> {
    if !n.is_finite() {
        return Err(CodecError::UnsupportedType(format!(
            "non-finite number {n} cannot be encoded"
        )));
    }
    Ok(format!("{NUM_TAG}{}", format_decimal(n)))
}

/// Shortest round-trippable decimal text, never in exponent notation.
///
/// Negative zero is written as `0`.
fn format_decimal(n: f64) -> String {
    let n = if n == 0.0 { 0.0 } else { n };
    n.to_string()
}

fn decode_str(s: &str) -> Result<Value> {
    match s.strip_prefix(BOOL_TAG) {
        Some("0") => return Ok(Value::Bool(false)),
        Some("1") => return Ok(Value::Bool(true)),
        _ => {}
    }
    match s.strip_prefix(NUM_TAG) {
        Some(payload) => decode_number(payload).map(Value::Number),
        None => Ok(Value::Str(s.to_string())),
    }
}

fn decode_number(payload: &str) -> Result<f64> {
    match payload.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => {
            debug!(payload, "invalid number payload");
            Err(CodecError::InvalidEncoding(format!(
                "invalid number payload {payload:?}"
            )))
        }
    }
}
