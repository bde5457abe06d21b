//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the workspace. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Record validation failures are *reported*, not raised: the validator
//!   returns them as data. [`IprofError::ValidationFailed`] exists only for
//!   collaborators that choose to turn an invalid verdict into an error.
//! - Schema construction errors are programmer errors in the field table
//!   and carry the offending field name.

use thiserror::Error;

/// Top-level error type for instrument profile operations.
#[derive(Error, Debug)]
pub enum IprofError {
    /// A schema definition could not be constructed.
    #[error("schema definition error: {0}")]
    Definition(#[from] DefinitionError),

    /// An assembled instrument record did not pass schema validation.
    #[error("instrument data for {identifier} failed validation: {}", errors.join("; "))]
    ValidationFailed {
        /// The identifier the caller asked for.
        identifier: String,
        /// Validation messages, in schema field order.
        errors: Vec<String>,
    },

    /// An instrument identifier is malformed.
    #[error("invalid instrument identifier: {0}")]
    InvalidIdentifier(String),

    /// No data source holds data for the identifier.
    #[error("no instrument data found for {0}")]
    NotFound(String),

    /// A data source was requested by a name that is not registered.
    #[error("unknown data source: {0}")]
    UnknownSource(String),

    /// A data source failed while fetching.
    #[error("source error: {0}")]
    Source(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised while constructing a schema definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// Two rules share the same field name.
    #[error("duplicate field '{0}' in schema definition")]
    DuplicateField(String),

    /// A rule has an empty field name.
    #[error("schema definition contains a field with an empty name")]
    EmptyFieldName,

    /// A rule has no description. Every field must document itself.
    #[error("field '{0}' has no description")]
    MissingDescription(String),
}
