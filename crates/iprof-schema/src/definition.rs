//! # Schema Definition
//!
//! An ordered, immutable catalog of [`FieldRule`]s. Declaration order is
//! significant: it is the order in which validation errors are reported.
//!
//! Construction checks the table once and fails with a [`DefinitionError`]
//! for duplicate names, empty names, or missing descriptions. After
//! construction nothing mutates the definition, so a single instance can
//! back any number of concurrent validations.

use std::collections::HashMap;

use iprof_core::{DefinitionError, Record};
use serde::Serialize;

use crate::rule::FieldRule;
use crate::validate::{validate, ValidationResult};

/// Ordered catalog of field rules for one record kind.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaDefinition {
    /// Schema identifier, used in logs and documentation.
    name: String,
    /// Rules in declaration order.
    fields: Vec<FieldRule>,
    /// Field name to position in `fields`.
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl SchemaDefinition {
    /// Build a definition from a table of rules, keeping their order.
    ///
    /// # Errors
    ///
    /// - `DefinitionError::EmptyFieldName` if a rule has an empty name.
    /// - `DefinitionError::MissingDescription` if a rule's description is
    ///   blank. Optional fields must be documented too.
    /// - `DefinitionError::DuplicateField` if two rules share a name.
    pub fn new(
        name: impl Into<String>,
        rules: impl IntoIterator<Item = FieldRule>,
    ) -> Result<Self, DefinitionError> {
        let mut fields = Vec::new();
        let mut index = HashMap::new();

        for rule in rules {
            if rule.name.is_empty() {
                return Err(DefinitionError::EmptyFieldName);
            }
            if rule.description.trim().is_empty() {
                return Err(DefinitionError::MissingDescription(rule.name));
            }
            if index.contains_key(&rule.name) {
                return Err(DefinitionError::DuplicateField(rule.name));
            }
            index.insert(rule.name.clone(), fields.len());
            fields.push(rule);
        }

        Ok(Self {
            name: name.into(),
            fields,
            index,
        })
    }

    /// Returns the schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up the rule for a field.
    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.index.get(field).map(|&i| &self.fields[i])
    }

    /// Whether the schema names this field.
    pub fn contains(&self, field: &str) -> bool {
        self.index.contains_key(field)
    }

    /// Iterate rules in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &FieldRule> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|r| r.name.as_str()).collect()
    }

    /// Names of required fields in declaration order.
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|r| r.required)
            .map(|r| r.name.as_str())
            .collect()
    }

    /// Validate a record against this schema. See [`validate`].
    pub fn validate(&self, record: &Record) -> ValidationResult {
        validate(record, self)
    }
}
