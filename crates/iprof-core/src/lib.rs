//! # iprof-core — Foundational Types for Instrument Profiles
//!
//! The leaf crate of the workspace. It defines the vocabulary every other
//! crate speaks: the primitive type tags a schema can demand, the record
//! model a validator consumes, the instrument identifier newtype, and the
//! error hierarchy.
//!
//! ## Key Design Principles
//!
//! 1. **Records are untyped maps.** A [`Record`] is a `serde_json` object.
//!    Absence (key missing) and explicit "no value" (`null`) are both
//!    representable and are distinct.
//!
//! 2. **Exact type tags.** [`FieldType::matches`] performs no coercion: an
//!    integer is not a float, a numeric string is not a number.
//!
//! 3. **No bare strings for identifiers.** [`InstrumentId`] is trimmed and
//!    non-empty by construction.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `iprof-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{DefinitionError, IprofError};
pub use identity::InstrumentId;
pub use value::{is_null_equivalent, value_type_name, FieldType, Record};
