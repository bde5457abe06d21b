//! # Profile Assembly
//!
//! [`ProfileAssembler`] runs fetch → normalize → validate for one
//! identifier. It is the one place where an invalid verdict becomes an
//! error: `IprofError::ValidationFailed` carries the identifier and every
//! validation message.

use iprof_core::{InstrumentId, IprofError, Record};
use iprof_schema::{instrument_schema, SchemaDefinition, ValidationResult};

use crate::normalize::Normalizer;
use crate::source::ProfileSource;

/// Fetches, normalizes, and validates instrument profiles.
pub struct ProfileAssembler<'s> {
    sources: Vec<Box<dyn ProfileSource>>,
    normalizer: Normalizer,
    schema: &'s SchemaDefinition,
}

impl ProfileAssembler<'static> {
    /// An assembler with no sources, the default normalizer, and the
    /// canonical instrument schema.
    pub fn new() -> Self {
        Self::with_schema(instrument_schema())
    }
}

impl Default for ProfileAssembler<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s> ProfileAssembler<'s> {
    /// An assembler validating against `schema`.
    pub fn with_schema(schema: &'s SchemaDefinition) -> Self {
        Self {
            sources: Vec::new(),
            normalizer: Normalizer::default(),
            schema,
        }
    }

    /// Append a source. Sources are tried in registration order.
    pub fn with_source(mut self, source: impl ProfileSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Replace the normalizer.
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Names of registered sources in order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Retrieve, normalize, and validate the profile for `identifier`.
    ///
    /// With `source = Some(name)` only that source is consulted. Without,
    /// sources are tried in order and `NotFound` falls through to the next.
    ///
    /// # Errors
    ///
    /// - `IprofError::UnknownSource` if `source` names no registered source.
    /// - `IprofError::NotFound` if no consulted source has the instrument.
    /// - `IprofError::ValidationFailed` if the normalized record does not
    ///   conform to the schema.
    /// - Any error a source raises other than `NotFound`.
    pub fn get_instrument_profile(
        &self,
        identifier: &str,
        source: Option<&str>,
    ) -> Result<Record, IprofError> {
        let id = InstrumentId::new(identifier)?;
        let raw = self.fetch(&id, source)?;
        let record = self.normalizer.normalize(raw);

        match self.schema.validate(&record) {
            ValidationResult::Valid => {
                tracing::info!(identifier = %id, schema = self.schema.name(), "profile assembled");
                Ok(record)
            }
            ValidationResult::Invalid(violations) => {
                tracing::warn!(
                    identifier = %id,
                    errors = violations.len(),
                    "instrument data failed validation"
                );
                Err(IprofError::ValidationFailed {
                    identifier: id.to_string(),
                    errors: violations.messages(),
                })
            }
        }
    }

    fn fetch(&self, id: &InstrumentId, source: Option<&str>) -> Result<Record, IprofError> {
        if let Some(name) = source {
            let chosen = self
                .sources
                .iter()
                .find(|s| s.name() == name)
                .ok_or_else(|| IprofError::UnknownSource(name.to_string()))?;
            return chosen.fetch(id);
        }

        for s in &self.sources {
            match s.fetch(id) {
                Ok(record) => {
                    tracing::debug!(identifier = %id, source = s.name(), "record fetched");
                    return Ok(record);
                }
                Err(IprofError::NotFound(_)) => {
                    tracing::debug!(
                        identifier = %id,
                        source = s.name(),
                        "not found, trying next source"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(IprofError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use iprof_core::FieldType;
    use iprof_schema::FieldRule;
    use serde_json::{json, Value};

    fn id(s: &str) -> InstrumentId {
        InstrumentId::new(s).unwrap()
    }

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    fn apple_raw() -> Record {
        record(json!({
            "isin": "us0378331005",
            "symbol": "AAPL",
            "issuer": "Apple Inc.",
            "country": "US",
            "type": "Equity",
            "currency": "usd",
            "coupon_rate": null,
            "updated_at": "2025-08-31T20:00:00Z"
        }))
    }

    struct FailingSource;

    impl ProfileSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn fetch(&self, _id: &InstrumentId) -> Result<Record, IprofError> {
            Err(IprofError::Source("upstream unavailable".into()))
        }
    }

    #[test]
    fn assembles_normalized_valid_profile() {
        let assembler = ProfileAssembler::new()
            .with_source(MemorySource::new("mem").with_record(&id("US0378331005"), apple_raw()));

        let profile = assembler.get_instrument_profile("US0378331005", None).unwrap();
        assert_eq!(profile["isin"], "US0378331005");
        assert_eq!(profile["ticker"], "AAPL");
        assert_eq!(profile["issuer_name"], "Apple Inc.");
        assert_eq!(profile["currency"], "USD");
    }

    #[test]
    fn invalid_profile_becomes_error_with_identifier() {
        let mut raw = apple_raw();
        raw.remove("isin");
        raw.remove("coupon_rate");
        raw.insert("coupon".into(), json!("5.0"));
        let assembler = ProfileAssembler::new()
            .with_source(MemorySource::new("mem").with_record(&id("AAPL"), raw));

        let err = assembler.get_instrument_profile("AAPL", None).unwrap_err();
        match &err {
            IprofError::ValidationFailed { identifier, errors } => {
                assert_eq!(identifier, "AAPL");
                assert_eq!(
                    errors,
                    &vec![
                        "Missing required field: 'isin'".to_string(),
                        "Field 'coupon_rate' has wrong type: expected float, got string"
                            .to_string(),
                    ]
                );
            }
            other => panic!("expected ValidationFailed, got {other}"),
        }
        assert!(err.to_string().contains("instrument data for AAPL failed validation"));
    }

    #[test]
    fn falls_through_not_found_sources() {
        let assembler = ProfileAssembler::new()
            .with_source(MemorySource::new("empty"))
            .with_source(MemorySource::new("full").with_record(&id("AAPL"), apple_raw()));
        assert_eq!(assembler.source_names(), vec!["empty", "full"]);
        assert!(assembler.get_instrument_profile("AAPL", None).is_ok());
    }

    #[test]
    fn source_error_stops_lookup() {
        let assembler = ProfileAssembler::new()
            .with_source(FailingSource)
            .with_source(MemorySource::new("full").with_record(&id("AAPL"), apple_raw()));
        let err = assembler.get_instrument_profile("AAPL", None).unwrap_err();
        assert!(matches!(err, IprofError::Source(_)));
    }

    #[test]
    fn named_source_is_the_only_one_consulted() {
        let assembler = ProfileAssembler::new()
            .with_source(MemorySource::new("full").with_record(&id("AAPL"), apple_raw()))
            .with_source(MemorySource::new("empty"));
        let err = assembler.get_instrument_profile("AAPL", Some("empty")).unwrap_err();
        assert!(matches!(err, IprofError::NotFound(_)));
        assert!(assembler.get_instrument_profile("AAPL", Some("full")).is_ok());
    }

    #[test]
    fn unknown_source_name() {
        let assembler = ProfileAssembler::new().with_source(MemorySource::new("mem"));
        let err = assembler.get_instrument_profile("AAPL", Some("bloomberg")).unwrap_err();
        assert!(matches!(err, IprofError::UnknownSource(ref n) if n == "bloomberg"));
    }

    #[test]
    fn no_sources_is_not_found() {
        let err = ProfileAssembler::default()
            .get_instrument_profile("AAPL", None)
            .unwrap_err();
        assert!(matches!(err, IprofError::NotFound(ref s) if s == "AAPL"));
    }

    #[test]
    fn blank_identifier_rejected() {
        let err = ProfileAssembler::new().get_instrument_profile("  ", None).unwrap_err();
        assert!(matches!(err, IprofError::InvalidIdentifier(_)));
    }

    #[test]
    fn custom_schema_and_normalizer() {
        let schema = SchemaDefinition::new(
            "bond",
            vec![
                FieldRule::required("isin", FieldType::String, "ISIN"),
                FieldRule::required("coupon_rate", FieldType::Float, "Coupon"),
            ],
        )
        .unwrap();
        let raw = record(json!({ "ISIN": "xs0000000001", "cpn": 4.25 }));
        let assembler = ProfileAssembler::with_schema(&schema)
            .with_normalizer(
                Normalizer::default()
                    .with_alias("ISIN", "isin")
                    .with_alias("cpn", "coupon_rate"),
            )
            .with_source(MemorySource::new("mem").with_record(&id("XS0000000001"), raw));

        let profile = assembler.get_instrument_profile("XS0000000001", None).unwrap();
        assert_eq!(profile["isin"], "XS0000000001");
        assert_eq!(profile["coupon_rate"], 4.25);
    }
}
