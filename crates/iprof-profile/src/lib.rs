//! # iprof-profile — Instrument Profile Assembly
//!
//! The pipeline around the validation core:
//!
//! ```text
//! identifier ──► ProfileSource::fetch ──► Normalizer ──► validate ──► Record
//!                                                           │
//!                                                           └─► IprofError::ValidationFailed
//! ```
//!
//! - [`source`] — where raw records come from ([`MemorySource`],
//!   [`DirectorySource`]).
//! - [`normalize`] — maps source-specific field names onto the schema's
//!   names and standardizes code-valued fields.
//! - [`assemble`] — [`ProfileAssembler::get_instrument_profile`], which
//!   turns an invalid verdict into an error naming the instrument.
//!
//! The validator itself never fails; this crate is where an invalid record
//! becomes a caller-visible error.

pub mod assemble;
pub mod normalize;
pub mod source;

pub use assemble::ProfileAssembler;
pub use normalize::Normalizer;
pub use source::{load_record, DirectorySource, MemorySource, ProfileSource};
