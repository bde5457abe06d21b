//! # Field Normalization
//!
//! Maps a raw, source-shaped record onto the schema's field names.
//!
//! - Keys are trimmed. A padded key never overwrites the exact key it
//!   trims to.
//! - Alias keys are renamed to their canonical name. An alias never
//!   overwrites a canonical key the record already carries.
//! - String values of code-valued fields (identifiers, country, venue,
//!   CFI, currency) are trimmed and upper-cased.
//! - Everything else passes through unchanged. Normalization never
//!   changes a value's type, so type errors still surface at validation.

use std::collections::{BTreeMap, BTreeSet};

use iprof_core::Record;
use serde_json::Value;

/// Source field names understood out of the box, with their schema names.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("symbol", "ticker"),
    ("issuer", "issuer_name"),
    ("country", "issuer_country"),
    ("type", "instrument_type"),
    ("exchange_mic", "mic"),
    ("cfi", "cfi_code"),
    ("coupon", "coupon_rate"),
    ("updated_at", "last_updated"),
];

/// Fields holding standardized codes.
const CODE_FIELDS: &[&str] = &[
    "isin",
    "cusip",
    "sedol",
    "issuer_country",
    "mic",
    "cfi_code",
    "currency",
];

/// Renames source-specific fields and standardizes code values.
#[derive(Debug, Clone)]
pub struct Normalizer {
    aliases: BTreeMap<String, String>,
    code_fields: BTreeSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            code_fields: CODE_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl Normalizer {
    /// A normalizer with no aliases and no code fields: keys are only
    /// trimmed.
    pub fn identity() -> Self {
        Self {
            aliases: BTreeMap::new(),
            code_fields: BTreeSet::new(),
        }
    }

    /// Register an alias `from` for the canonical field `to`.
    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.aliases.insert(from.into(), to.into());
        self
    }

    /// Returns the canonical name for `field`, or `field` itself.
    pub fn canonical_name<'a>(&'a self, field: &'a str) -> &'a str {
        self.aliases.get(field).map_or(field, String::as_str)
    }

    /// Normalize a raw record.
    ///
    /// Keys land in three passes: exact canonical keys, then padded keys,
    /// then aliases (exact spellings before padded ones). A key whose target
    /// is already taken is dropped with a `debug` event.
    pub fn normalize(&self, raw: Record) -> Record {
        let mut out = Record::new();
        let mut padded = Vec::new();
        let mut aliased = Vec::new();

        for (key, value) in raw {
            let trimmed = key.trim();
            if let Some(canonical) = self.aliases.get(trimmed) {
                let exact = trimmed.len() == key.len();
                aliased.push((exact, key.clone(), canonical.clone(), value));
            } else if trimmed.len() == key.len() {
                out.insert(key, value);
            } else {
                padded.push((key.clone(), trimmed.to_string(), value));
            }
        }

        for (raw_key, field, value) in padded {
            insert_unless_present(&mut out, &raw_key, field, value);
        }

        // Stable: exact alias spellings first, each group in key order.
        aliased.sort_by_key(|(exact, ..)| !exact);
        for (_, raw_key, canonical, value) in aliased {
            insert_unless_present(&mut out, &raw_key, canonical, value);
        }

        for field in &self.code_fields {
            if let Some(Value::String(s)) = out.get_mut(field) {
                *s = s.trim().to_uppercase();
            }
        }

        out
    }
}

fn insert_unless_present(out: &mut Record, raw_key: &str, field: String, value: Value) {
    if out.contains_key(&field) {
        tracing::debug!(
            key = %raw_key,
            field = %field,
            "key ignored, field already present"
        );
        return;
    }
    out.insert(field, value);
}
