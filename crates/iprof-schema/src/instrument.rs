//! # Canonical Instrument Schema
//!
//! The standard catalog of descriptive, static attributes of a financial
//! instrument. Identifier and classification fields align with ISO 6166
//! (ISIN), ISO 10962 (CFI), ISO 10383 (MIC), ISO 3166-1 (country) and
//! ISO 4217 (currency). Only the primitive type is enforced; code formats
//! are documentation.
//!
//! | # | Field | Required | Type |
//! |---|---|---|---|
//! |  1 | isin | yes | string |
//! |  2 | ticker | no | string |
//! |  3 | cusip | no | string |
//! |  4 | sedol | no | string |
//! |  5 | issuer_name | yes | string |
//! |  6 | issuer_country | yes | string |
//! |  7 | instrument_type | yes | string |
//! |  8 | sector | no | string |
//! |  9 | industry | no | string |
//! | 10 | mic | no | string |
//! | 11 | cfi_code | no | string |
//! | 12 | listing_date | no | string |
//! | 13 | maturity_date | no | string |
//! | 14 | currency | no | string |
//! | 15 | dividend_policy | no | string |
//! | 16 | coupon_rate | no | float |
//! | 17 | rating | no | string |
//! | 18 | last_updated | yes | string |

use std::sync::OnceLock;

use iprof_core::FieldType;

use crate::definition::SchemaDefinition;
use crate::rule::FieldRule;

/// Name of the canonical instrument schema.
pub const INSTRUMENT_SCHEMA_NAME: &str = "instrument_profile";

/// Number of fields in the canonical instrument schema.
pub const INSTRUMENT_FIELD_COUNT: usize = 18;

static INSTRUMENT_SCHEMA: OnceLock<SchemaDefinition> = OnceLock::new();

/// Returns the process-wide instrument schema, building it on first use.
///
/// # Panics
///
/// Panics if the built-in field table is malformed (duplicate name or
/// missing description). That is a defect in this crate, caught by the
/// unit tests below.
pub fn instrument_schema() -> &'static SchemaDefinition {
    INSTRUMENT_SCHEMA.get_or_init(|| {
        SchemaDefinition::new(INSTRUMENT_SCHEMA_NAME, instrument_rules())
            .unwrap_or_else(|e| panic!("built-in instrument schema is malformed: {e}"))
    })
}

fn instrument_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::required(
            "isin",
            FieldType::String,
            "International Securities Identification Number (ISO 6166)",
        )
        .with_example("US0378331005"),
        FieldRule::optional("ticker", FieldType::String, "Exchange ticker symbol")
            .with_example("AAPL"),
        FieldRule::optional(
            "cusip",
            FieldType::String,
            "CUSIP identifier (North America)",
        )
        .with_example("037833100"),
        FieldRule::optional("sedol", FieldType::String, "SEDOL identifier (UK)")
            .with_example("2046251"),
        FieldRule::required(
            "issuer_name",
            FieldType::String,
            "Full legal name of the issuing entity",
        )
        .with_example("Apple Inc."),
        FieldRule::required(
            "issuer_country",
            FieldType::String,
            "Country of issuance (ISO 3166-1 alpha-2 code)",
        )
        .with_example("US"),
        FieldRule::required(
            "instrument_type",
            FieldType::String,
            "Type of instrument (e.g., Equity, Bond, ETF)",
        )
        .with_example("Equity"),
        FieldRule::optional(
            "sector",
            FieldType::String,
            "Economic sector classification",
        )
        .with_example("Technology"),
        FieldRule::optional("industry", FieldType::String, "Industry classification")
            .with_example("Consumer Electronics"),
        FieldRule::optional(
            "mic",
            FieldType::String,
            "Market Identifier Code (ISO 10383) of the primary listing",
        )
        .with_example("XNAS"),
        FieldRule::optional(
            "cfi_code",
            FieldType::String,
            "Classification of Financial Instruments code (ISO 10962)",
        )
        .with_example("ESVUFR"),
        FieldRule::optional(
            "listing_date",
            FieldType::String,
            "Date of initial listing (YYYY-MM-DD)",
        )
        .with_example("1980-12-12"),
        FieldRule::optional(
            "maturity_date",
            FieldType::String,
            "Maturity date for debt instruments (YYYY-MM-DD)",
        ),
        FieldRule::optional(
            "currency",
            FieldType::String,
            "Trading currency (ISO 4217 code)",
        )
        .with_example("USD"),
        FieldRule::optional(
            "dividend_policy",
            FieldType::String,
            "Summary of dividend policy (if applicable)",
        )
        .with_example("Quarterly dividends"),
        FieldRule::optional(
            "coupon_rate",
            FieldType::Float,
            "Coupon rate for fixed income instruments (percentage)",
        ),
        FieldRule::optional("rating", FieldType::String, "Credit rating (if applicable)")
            .with_example("AA+"),
        FieldRule::required(
            "last_updated",
            FieldType::String,
            "Timestamp of last data update (ISO 8601)",
        )
        .with_example("2025-08-31T20:00:00Z"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_without_error() {
        let schema = SchemaDefinition::new(INSTRUMENT_SCHEMA_NAME, instrument_rules());
        assert!(schema.is_ok(), "built-in table rejected: {:?}", schema.err());
    }

    #[test]
    fn has_all_fields_in_canonical_order() {
        let schema = instrument_schema();
        assert_eq!(schema.len(), INSTRUMENT_FIELD_COUNT);
        assert_eq!(
            schema.field_names(),
            vec![
                "isin",
                "ticker",
                "cusip",
                "sedol",
                "issuer_name",
                "issuer_country",
                "instrument_type",
                "sector",
                "industry",
                "mic",
                "cfi_code",
                "listing_date",
                "maturity_date",
                "currency",
                "dividend_policy",
                "coupon_rate",
                "rating",
                "last_updated",
            ]
        );
    }

    #[test]
    fn required_fields() {
        assert_eq!(
            instrument_schema().required_fields(),
            vec![
                "isin",
                "issuer_name",
                "issuer_country",
                "instrument_type",
                "last_updated",
            ]
        );
    }

    #[test]
    fn coupon_rate_is_the_only_float() {
        let floats: Vec<&str> = instrument_schema()
            .rules()
            .filter(|r| r.expected_type == FieldType::Float)
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(floats, vec!["coupon_rate"]);
    }

    #[test]
    fn fields_without_examples() {
        let missing: Vec<&str> = instrument_schema()
            .rules()
            .filter(|r| r.example.is_none())
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(missing, vec!["maturity_date", "coupon_rate"]);
    }

    #[test]
    fn returns_the_same_instance() {
        let a = instrument_schema() as *const SchemaDefinition;
        let b = instrument_schema() as *const SchemaDefinition;
        assert_eq!(a, b);
        assert_eq!(instrument_schema().name(), INSTRUMENT_SCHEMA_NAME);
    }
}
