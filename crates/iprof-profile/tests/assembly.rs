//! End-to-end assembly from record files on disk.

use iprof_core::IprofError;
use iprof_profile::{DirectorySource, MemorySource, ProfileAssembler};

const APPLE_YAML: &str = r#"
isin: us0378331005
symbol: AAPL
cusip: "037833100"
issuer: Apple Inc.
country: us
type: Equity
exchange_mic: xnas
currency: usd
maturity_date: ~
coupon_rate: ~
updated_at: "2025-08-31T20:00:00Z"
"#;

const BOND_JSON: &str = r#"{
    "isin": "US912828YK04",
    "issuer_name": "United States Treasury",
    "issuer_country": "US",
    "instrument_type": "Bond",
    "maturity_date": "2029-10-31",
    "coupon_rate": "1.5",
    "last_updated": "2025-08-31T20:00:00Z"
}"#;

#[test]
fn yaml_record_is_normalized_and_validated() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("AAPL.yaml"), APPLE_YAML).unwrap();

    let assembler = ProfileAssembler::new().with_source(DirectorySource::new("files", dir.path()));
    let profile = assembler.get_instrument_profile("AAPL", None).unwrap();

    assert_eq!(profile["isin"], "US0378331005");
    assert_eq!(profile["ticker"], "AAPL");
    assert_eq!(profile["cusip"], "037833100");
    assert_eq!(profile["issuer_country"], "US");
    assert_eq!(profile["mic"], "XNAS");
    assert!(profile["coupon_rate"].is_null());
}

#[test]
fn string_coupon_fails_with_every_message() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("UST29.json"), BOND_JSON).unwrap();

    let assembler = ProfileAssembler::new().with_source(DirectorySource::new("files", dir.path()));
    let err = assembler.get_instrument_profile("UST29", None).unwrap_err();

    match err {
        IprofError::ValidationFailed { identifier, errors } => {
            assert_eq!(identifier, "UST29");
            assert_eq!(
                errors,
                vec!["Field 'coupon_rate' has wrong type: expected float, got string"]
            );
        }
        other => panic!("expected ValidationFailed, got {other}"),
    }
}

#[test]
fn directory_then_memory_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let fallback = serde_json::from_str(APPLE_CACHED_JSON).unwrap();

    let assembler = ProfileAssembler::new()
        .with_source(DirectorySource::new("files", dir.path()))
        .with_source(MemorySource::new("cache").with_record(&"AAPL".parse().unwrap(), fallback));

    let profile = assembler.get_instrument_profile("AAPL", None).unwrap();
    assert_eq!(profile["issuer_name"], "Apple Inc.");

    let err = assembler.get_instrument_profile("AAPL", Some("files")).unwrap_err();
    assert!(matches!(err, IprofError::NotFound(_)));
}

#[test]
fn malformed_file_surfaces_as_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("BAD.json"), "{ not json").unwrap();

    let assembler = ProfileAssembler::new().with_source(DirectorySource::new("files", dir.path()));
    let err = assembler.get_instrument_profile("BAD", None).unwrap_err();
    assert!(matches!(err, IprofError::Serialization(_)));
}

const APPLE_CACHED_JSON: &str = r#"{
    "isin": "US0378331005",
    "issuer_name": "Apple Inc.",
    "issuer_country": "US",
    "instrument_type": "Equity",
    "last_updated": "2025-08-31T20:00:00Z"
}"#;
