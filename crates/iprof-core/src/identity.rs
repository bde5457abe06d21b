//! # Instrument Identifier
//!
//! Newtype for the identifier a caller asks a profile for (ISIN, ticker,
//! CUSIP, SEDOL, ...). The identifier is opaque: no checksum or format
//! checks are applied, only trimming and a non-empty requirement.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IprofError;

/// Identifier of a financial instrument as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InstrumentId(String);

impl InstrumentId {
    /// Create an identifier, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `IprofError::InvalidIdentifier` if the identifier is empty
    /// after trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, IprofError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IprofError::InvalidIdentifier("must not be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InstrumentId {
    type Err = IprofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for InstrumentId {
    type Error = IprofError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InstrumentId> for String {
    fn from(id: InstrumentId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let id = InstrumentId::new("  US0378331005\n").unwrap();
        assert_eq!(id.as_str(), "US0378331005");
        assert_eq!(id.to_string(), "US0378331005");
    }

    #[test]
    fn rejects_empty() {
        assert!(InstrumentId::new("").is_err());
        assert!(InstrumentId::new("   ").is_err());
        assert!(matches!(
            "\t".parse::<InstrumentId>(),
            Err(IprofError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn keeps_case() {
        let id: InstrumentId = "aapl".parse().unwrap();
        assert_eq!(id.as_str(), "aapl");
    }

    #[test]
    fn serde_round_trip_validates() {
        let id: InstrumentId = serde_json::from_str("\" AAPL \"").unwrap();
        assert_eq!(id.as_str(), "AAPL");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"AAPL\"");
        assert!(serde_json::from_str::<InstrumentId>("\"  \"").is_err());
    }
}
