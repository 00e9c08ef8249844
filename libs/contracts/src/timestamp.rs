//! Wire timestamps

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use common::{ContractError, ContractResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A timestamp exactly as the backend sent it.
///
/// The text is kept verbatim, so re-encoding a payload never rewrites the
/// offset or precision and a non-RFC 3339 value still decodes. Use
/// [`Timestamp::parse`] to get a `chrono` value.
///
/// Equality compares the text, not the instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parse the text as RFC 3339, keeping its offset
    pub fn parse(&self) -> ContractResult<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.0).map_err(|source| ContractError::InvalidTimestamp {
            value: self.0.clone(),
            source,
        })
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Formats as `YYYY-MM-DDTHH:MM:SS[.fff]Z`
impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
