use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Placeholder written for any output field that could not be resolved.
pub const SENTINEL: &str = "Unknown";

// ── Source record ────────────────────────────────────────────────────────

/// One raw input row: column name → cell text, in column order.
///
/// Deserializes straight from a headered CSV row. Keys are kept exactly as
/// they appear in the header, so the same logical field may show up under
/// different spellings depending on who produced the file. A repeated
/// column keeps its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SourceRecord {
    fields: IndexMap<String, String>,
}

impl SourceRecord {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The value of the first key in `keys` that holds non-blank text.
    pub fn first_non_blank(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|k| self.get(k))
            .find(|v| !v.trim().is_empty())
    }

    /// Column names in input order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SourceRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        SourceRecord {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ── Resolved value ───────────────────────────────────────────────────────

/// An inferred value that may not have been determinable from the input.
///
/// Serializes as the bare inner value when known and as the string
/// `"Unknown"` otherwise, so a numeric slot such as `Year` holds either a
/// number or the sentinel string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<T> {
    Known(T),
    Unknown,
}

impl<T> Resolved<T> {
    pub fn is_known(&self) -> bool {
        matches!(self, Resolved::Known(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        match self {
            Resolved::Known(v) => Resolved::Known(f(v)),
            Resolved::Unknown => Resolved::Unknown,
        }
    }
}

impl<T> Default for Resolved<T> {
    fn default() -> Self {
        Resolved::Unknown
    }
}

impl<T> From<Option<T>> for Resolved<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Resolved::Known(v),
            None => Resolved::Unknown,
        }
    }
}

impl<T: Serialize> Serialize for Resolved<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Resolved::Known(v) => v.serialize(serializer),
            Resolved::Unknown => serializer.serialize_str(SENTINEL),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Resolved<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Known(v) => v.fmt(f),
            Resolved::Unknown => f.write_str(SENTINEL),
        }
    }
}

// ── Enriched record ──────────────────────────────────────────────────────

/// The normalized output row. Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedRecord {
    #[serde(rename = "Sex")]
    pub sex: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Manner of Death")]
    pub manner_of_death: String,
    #[serde(rename = "Perpetrator")]
    pub perpetrator: String,
    #[serde(rename = "Status of Case")]
    pub status_of_case: String,
    #[serde(rename = "Date of Incident")]
    pub date_of_incident: String,
    #[serde(rename = "Occupation")]
    pub occupation: String,
    /// Empty rather than `"Unknown"` when the source has none.
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Name")]
    pub name: String,
    // Enriched fields
    #[serde(rename = "County")]
    pub county: Resolved<String>,
    #[serde(rename = "Year")]
    pub year: Resolved<i32>,
    #[serde(rename = "Month")]
    pub month: Resolved<String>,
}
