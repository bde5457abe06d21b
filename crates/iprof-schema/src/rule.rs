//! Field rules: one entry per recognized field of a schema.

use iprof_core::FieldType;
use serde::Serialize;
use serde_json::Value;

/// Validation rule and documentation for a single field.
///
/// Only `name`, `expected_type` and `required` take part in validation.
/// `description` and `example` document the field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRule {
    /// Field name, unique within a schema.
    pub name: String,
    /// Primitive type a present, non-null value must have.
    #[serde(rename = "type")]
    pub expected_type: FieldType,
    /// Whether the field's key must be present in a record.
    pub required: bool,
    /// Human-readable explanation of the field.
    pub description: String,
    /// Example value, if one is meaningful.
    pub example: Option<Value>,
}

impl FieldRule {
    /// Create a rule for a field that must be present.
    pub fn required(
        name: impl Into<String>,
        expected_type: FieldType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            expected_type,
            required: true,
            description: description.into(),
            example: None,
        }
    }

    /// Create a rule for a field that may be omitted.
    pub fn optional(
        name: impl Into<String>,
        expected_type: FieldType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            required: false,
            ..Self::required(name, expected_type, description)
        }
    }

    /// Attach an example value.
    pub fn with_example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }
}
