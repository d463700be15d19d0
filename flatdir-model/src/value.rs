//! Scalar field values.
//!
//! The original directory backend stored entries as loosely typed object
//! maps discovered at runtime. Here a field holds exactly one of two scalar
//! shapes, string or integer; absence is modeled by the field simply not
//! being present in the map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A record's field bag: field name to scalar value.
///
/// The same shape is used for create/update payloads and for query filters.
pub type FieldMap = HashMap<String, FieldValue>;

/// A single field value: a string or an integer.
///
/// Serialized untagged, so JSON payloads read as plain scalars
/// (`"AAA"`, `42`) rather than enum wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Str(String),
    Int(i64),
}

impl FieldValue {
    /// Returns the string content, or `None` for an integer value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// Returns the integer content, or `None` for a string value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(_) => None,
        }
    }

    /// Numeric interpretation used for type-aware ordering: an integer
    /// value, or a string that parses as one.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(s) => s.parse().ok(),
        }
    }
}

impl fmt::Display for FieldValue {
    /// Text form of the value, used by fulltext matching and projection
    /// diagnostics. Integers render in decimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}
