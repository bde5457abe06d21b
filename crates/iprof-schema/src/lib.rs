//! # iprof-schema — Schema Definition & Record Validation
//!
//! The validation engine for instrument profiles. A [`SchemaDefinition`] is
//! an immutable, ordered catalog of [`FieldRule`]s; [`validate`] walks it
//! field by field and reports every way a [`Record`](iprof_core::Record)
//! fails to conform.
//!
//! ## Schema as Data
//!
//! The catalog is a table consulted by one generic loop. Adding a field is
//! a table edit, never a new code path.
//!
//! ## Validation Contract
//!
//! - Deterministic and total: the same inputs give the same result,
//!   including error order, and validation never panics.
//! - Exhaustive: every failing field is reported in one pass, in schema
//!   order, at most once per field.
//! - Open record shape: record keys the schema does not name are ignored.
//! - Null-blind: a `null` value means "no value supplied" and is never an
//!   error, even for required fields. Only a missing key fails `required`.
//!
//! The verdict is a [`ValidationResult`], a tagged `Valid` / `Invalid`
//! value, so a failing result cannot be mistaken for success.
//!
//! ## Canonical Schema
//!
//! [`instrument_schema`] returns the process-wide 18-field instrument
//! schema, built once on first use.

pub mod definition;
pub mod describe;
pub mod instrument;
pub mod rule;
pub mod validate;

pub use definition::SchemaDefinition;
pub use instrument::{instrument_schema, INSTRUMENT_FIELD_COUNT, INSTRUMENT_SCHEMA_NAME};
pub use rule::FieldRule;
pub use validate::{validate, FieldViolation, ValidationReport, ValidationResult, Violations};
