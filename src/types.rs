//! Core value types

use std::collections::BTreeMap;

/// String-keyed map of values. Used for nested maps and flat path maps alike.
pub type Map = BTreeMap<String, Value>;

/// Value type enumeration
///
/// The closed set of data the codec accepts. Numbers are `f64`, so integers
/// beyond 2^53 lose precision the same way they would in a JSON transport.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// String value
    Str(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// Key-value map (ordered by key)
    Map(Map),
}

// ============================================================
// Builder functions
// ============================================================

impl Value {
    /// Create a null value
    pub fn null() -> Self {
        Value::Null
    }

    /// Create a boolean value
    pub fn bool(v: bool) -> Self {
        Value::Bool(v)
    }

    /// Create a number value
    pub fn number(v: impl Into<f64>) -> Self {
        Value::Number(v.into())
    }

    /// Create a string value
    pub fn str(v: impl Into<String>) -> Self {
        Value::Str(v.into())
    }

    /// Create a list value
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    /// Create a map value from key/value pairs
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Short name of the variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    // ============================================================
    // Type checking
    // ============================================================

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    // ============================================================
    // Value extraction
    // ============================================================

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Get a value from a map by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries.get(key),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v.into())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Map(v)
    }
}

/// Helper to create a map entry
pub fn field(key: impl Into<String>, value: impl Into<Value>) -> (String, Value) {
    (key.into(), value.into())
}
