//! # Data Sources
//!
//! A [`ProfileSource`] returns the raw record it holds for an instrument.
//! Raw records use whatever field names the source uses; the
//! [`Normalizer`](crate::Normalizer) maps them afterwards.
//!
//! Sources return `IprofError::NotFound` when they have nothing for an
//! identifier, so an assembler can fall through to the next source. Any
//! other error aborts the lookup.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use iprof_core::{InstrumentId, IprofError, Record};
use serde_json::Value;

/// A provider of raw instrument records.
pub trait ProfileSource: Send + Sync {
    /// Name used to select this source explicitly.
    fn name(&self) -> &str;

    /// Fetch the raw record for `id`.
    ///
    /// # Errors
    ///
    /// `IprofError::NotFound` if the source has no data for `id`; any
    /// other variant if the source itself failed.
    fn fetch(&self, id: &InstrumentId) -> Result<Record, IprofError>;
}

/// In-memory source keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    records: BTreeMap<String, Record>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: BTreeMap::new(),
        }
    }

    /// Add or replace the record for an identifier.
    pub fn insert(&mut self, id: &InstrumentId, record: Record) {
        self.records.insert(id.as_str().to_string(), record);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_record(mut self, id: &InstrumentId, record: Record) -> Self {
        self.insert(id, record);
        self
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProfileSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, id: &InstrumentId) -> Result<Record, IprofError> {
        self.records
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| IprofError::NotFound(id.to_string()))
    }
}

/// Source backed by a directory of record files.
///
/// The record for `ID` is read from the first of `ID.json`, `ID.yaml`,
/// `ID.yml` that exists.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    name: String,
    dir: PathBuf,
}

/// File extensions tried, in order.
const RECORD_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

impl DirectorySource {
    /// Create a source reading from `dir`.
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
        }
    }

    /// Returns the directory this source reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: &InstrumentId) -> Result<Option<PathBuf>, IprofError> {
        let stem = id.as_str();
        if stem.contains(['/', '\\']) || stem.starts_with('.') {
            return Err(IprofError::Source(format!(
                "identifier '{stem}' cannot be used as a file name"
            )));
        }
        Ok(RECORD_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{stem}.{ext}")))
            .find(|p| p.is_file()))
    }
}

impl ProfileSource for DirectorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, id: &InstrumentId) -> Result<Record, IprofError> {
        match self.record_path(id)? {
            Some(path) => {
                tracing::debug!(source = %self.name, path = %path.display(), "reading record file");
                load_record(&path)
            }
            None => Err(IprofError::NotFound(id.to_string())),
        }
    }
}

/// Load a record from a JSON or YAML file.
///
/// The format is chosen by extension: `.yaml`/`.yml` for YAML, anything
/// else as JSON. The document's top level must be a mapping.
///
/// # Errors
///
/// `IprofError::Io` if the file cannot be read, `IprofError::Serialization`
/// if it does not parse, is not a mapping, or holds a non-finite YAML float
/// (`.nan`, `.inf`), which has no JSON representation.
pub fn load_record(path: &Path) -> Result<Record, IprofError> {
    let content = std::fs::read_to_string(path)?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let value: Value = match ext {
        "yaml" | "yml" => yaml_to_json(&content).map_err(|e| {
            IprofError::Serialization(format!("invalid YAML in '{}': {e}", path.display()))
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            IprofError::Serialization(format!("invalid JSON in '{}': {e}", path.display()))
        })?,
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(IprofError::Serialization(format!(
            "record in '{}' must be a mapping, got {}",
            path.display(),
            iprof_core::value_type_name(&other)
        ))),
    }
}

/// Parse YAML and convert it to a JSON value.
///
/// serde_json stores non-finite floats as `null`, which would turn a
/// concrete value into "no value supplied". Those are rejected instead.
fn yaml_to_json(content: &str) -> Result<Value, String> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    if let Some(key) = find_non_finite(&yaml, "") {
        return Err(format!("non-finite number at '{key}'"));
    }
    serde_json::to_value(&yaml).map_err(|e| e.to_string())
}

/// Path of the first non-finite float in `value`, if any.
fn find_non_finite(value: &serde_yaml::Value, path: &str) -> Option<String> {
    match value {
        serde_yaml::Value::Number(n) if n.is_nan() || n.is_infinite() => {
            Some(if path.is_empty() { ".".to_string() } else { path.to_string() })
        }
        serde_yaml::Value::Sequence(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| find_non_finite(item, &format!("{path}[{i}]"))),
        serde_yaml::Value::Mapping(map) => map.iter().find_map(|(k, v)| {
            let key = match k {
                serde_yaml::Value::String(s) => s.clone(),
                other => format!("{other:?}"),
            };
            let child = if path.is_empty() { key } else { format!("{path}.{key}") };
            find_non_finite(v, &child)
        }),
        serde_yaml::Value::Tagged(tagged) => find_non_finite(&tagged.value, path),
        _ => None,
    }
}
