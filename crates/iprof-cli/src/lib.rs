//! # iprof-cli — Instrument Profile Command-Line Interface
//!
//! ## Subcommands
//!
//! - `validate` — check JSON/YAML record files against the instrument schema
//! - `schema` — print the schema catalog as Markdown or JSON
//! - `profile` — assemble a normalized, validated profile from a record directory
//!
//! Argument parsing lives here next to each handler; handlers delegate to
//! `iprof-schema` and `iprof-profile` and return a process exit code.

pub mod profile;
pub mod schema;
pub mod validate;
