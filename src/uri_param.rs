//! Opaque URL parameters
//!
//! A value is written as compact JSON and then base64-encoded with the
//! URL-safe alphabet (`-` and `_`, no `=` padding), so the result can be
//! placed in a path segment or query string without escaping.

use crate::error::*;
use crate::json_bridge::{parse_json, stringify_json};
use crate::types::*;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64_URL, Engine as _};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Encode a value as an opaque URL-safe parameter
pub fn encode_uri_parameter(value: &Value) -> Result<String> {
    let json = stringify_json(value)?;
    Ok(BASE64_URL.encode(json))
}

/// Encode any serializable value as an opaque URL-safe parameter
pub fn encode_uri_parameter_from<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).map_err(|e| CodecError::Serialization(e.to_string()))?;
    Ok(BASE64_URL.encode(json))
}

/// Decode an opaque URL-safe parameter back into a value
pub fn decode_uri_parameter(s: &str) -> Result<Value> {
    let json = decode_json_text(s)?;
    parse_json(&json).inspect_err(|e| debug!(error = %e, "uri parameter is not valid JSON"))
}

/// Decode an opaque URL-safe parameter straight into a typed value
pub fn decode_uri_parameter_into<T: DeserializeOwned>(s: &str) -> Result<T> {
    let json = decode_json_text(s)?;
    serde_json::from_str(&json).map_err(|e| {
        debug!(error = %e, "uri parameter does not match target type");
        CodecError::Decoding(e.to_string())
    })
}

fn decode_json_text(s: &str) -> Result<String> {
    // Padded input is accepted even though encoding never produces it.
    let bytes = BASE64_URL.decode(s.trim_end_matches('=')).map_err(|e| {
        debug!(error = %e, "uri parameter is not URL-safe base64");
        CodecError::Decoding(e.to_string())
    })?;
    String::from_utf8(bytes).map_err(|e| CodecError::Decoding(e.to_string()))
}
