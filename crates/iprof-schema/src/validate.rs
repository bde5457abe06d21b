//! # Record Validation
//!
//! Walks a [`SchemaDefinition`] in declaration order and checks a record
//! against each rule:
//!
//! 1. Required field whose key is absent: `MissingRequiredField`. No type
//!    check follows for that field.
//! 2. Present, non-null value whose runtime type differs from the rule's
//!    tag: `TypeMismatch`.
//! 3. Absent optional field, or a `null` value (required or not): no error.
//!
//! Record keys the schema does not name are never inspected.
//!
//! Every failing field is reported, at most once, in schema order. The
//! validator never stops at the first problem and never panics; whether an
//! invalid record is fatal is the caller's decision.

use std::fmt;

use iprof_core::{is_null_equivalent, value_type_name, FieldType, Record};
use serde::Serialize;
use thiserror::Error;

use crate::definition::SchemaDefinition;

/// A single way a record fails its schema.
///
/// `Display` renders the human-readable message reported to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldViolation {
    /// A required field's key is absent from the record.
    #[error("Missing required field: '{field}'")]
    MissingRequiredField {
        /// The missing field.
        field: String,
    },

    /// A present, non-null value has the wrong runtime type.
    #[error("Field '{field}' has wrong type: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The offending field.
        field: String,
        /// Type tag declared by the schema.
        expected: FieldType,
        /// Runtime type name of the supplied value.
        actual: &'static str,
    },
}

impl FieldViolation {
    /// The field this violation concerns.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredField { field } | Self::TypeMismatch { field, .. } => field,
        }
    }
}

/// Non-empty, ordered collection of violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<FieldViolation>,
}

impl Violations {
    /// Returns the number of violations. Never zero.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations in schema order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Rendered messages in schema order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<FieldViolation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

/// Verdict of validating one record.
///
/// A tagged value rather than a `(bool, errors)` pair: callers must match
/// on `Invalid` to get at the errors, so a failing verdict cannot pass a
/// truthiness-style check by accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The record conforms to the schema.
    Valid,
    /// The record violates the schema in at least one way.
    Invalid(Violations),
}

impl ValidationResult {
    /// `Valid` if `violations` is empty, otherwise `Invalid`.
    pub fn from_violations(violations: Vec<FieldViolation>) -> Self {
        if violations.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(Violations { violations })
        }
    }

    /// Whether the record conforms.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Violations in schema order; empty when valid.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::Valid => &[],
            Self::Invalid(v) => v.violations(),
        }
    }

    /// Rendered error messages in schema order; empty when valid.
    pub fn errors(&self) -> Vec<String> {
        self.violations().iter().map(ToString::to_string).collect()
    }

    /// Convert into a `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<(), Violations> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(v) => Err(v),
        }
    }

    /// Flat `{valid, errors}` view for serialization.
    pub fn report(&self) -> ValidationReport {
        ValidationReport {
            valid: self.is_valid(),
            errors: self.errors(),
        }
    }
}

/// Serializable `{valid, errors}` summary of a [`ValidationResult`].
///
/// `valid == errors.is_empty()` holds for every report produced by
/// [`ValidationResult::report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether the record conforms.
    pub valid: bool,
    /// Error messages in schema order.
    pub errors: Vec<String>,
}

/// Validate `record` against `schema`.
///
/// Pure and total: reads both arguments, mutates neither, and returns a
/// verdict for every input. Runs in time linear in the number of schema
/// fields.
pub fn validate(record: &Record, schema: &SchemaDefinition) -> ValidationResult {
    let mut violations = Vec::new();

    for rule in schema.rules() {
        match record.get(&rule.name) {
            None => {
                if rule.required {
                    violations.push(FieldViolation::MissingRequiredField {
                        field: rule.name.clone(),
                    });
                }
            }
            Some(value) if is_null_equivalent(value) => {}
            Some(value) => {
                if !rule.expected_type.matches(value) {
                    violations.push(FieldViolation::TypeMismatch {
                        field: rule.name.clone(),
                        expected: rule.expected_type,
                        actual: value_type_name(value),
                    });
                }
            }
        }
    }

    tracing::debug!(
        schema = schema.name(),
        fields = schema.len(),
        errors = violations.len(),
        "record validated"
    );

    ValidationResult::from_violations(violations)
}
