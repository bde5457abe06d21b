//! # Record & Value Model
//!
//! A [`Record`] is a flat JSON object mapping field names to untyped values.
//! Three states are distinguishable for any field:
//!
//! | State | Representation |
//! |---|---|
//! | absent | key not present in the map |
//! | null-equivalent | `Value::Null` |
//! | concrete | any other `Value` |
//!
//! [`FieldType`] is the primitive type tag a schema attaches to a field.
//! Matching is exact. In particular `Float` does not accept integral JSON
//! numbers: `5` is an `int`, `5.0` is a `float`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A normalized record: field name to untyped value.
pub type Record = serde_json::Map<String, Value>;

/// Primitive type tag for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// UTF-8 string.
    #[serde(rename = "string")]
    String,
    /// Floating-point number.
    #[serde(rename = "float")]
    Float,
    /// Integral number.
    #[serde(rename = "int")]
    Integer,
    /// Boolean.
    #[serde(rename = "bool")]
    Boolean,
}

impl FieldType {
    /// Returns all type tags.
    pub fn all() -> &'static [FieldType] {
        &[Self::String, Self::Float, Self::Integer, Self::Boolean]
    }

    /// Returns the tag name used in validation messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Float => "float",
            Self::Integer => "int",
            Self::Boolean => "bool",
        }
    }

    /// Whether `value`'s runtime type is exactly this tag.
    ///
    /// `Value::Null` never matches; callers decide what null means.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::String, Value::String(_)) => true,
            (Self::Float, Value::Number(n)) => n.is_f64(),
            (Self::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (Self::Boolean, Value::Bool(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a value stands for "no value supplied".
pub fn is_null_equivalent(value: &Value) -> bool {
    value.is_null()
}

/// Returns the runtime type name of a value for error messages.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_f64() {
                "float"
            } else {
                "int"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
