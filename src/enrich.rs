//! Source row → enriched output row.
//!
//! Each logical field is read from whichever of its accepted key spellings
//! holds text, whitespace-normalized and defaulted. County, Year and Month
//! are inferred by [`classify`](crate::classify) and [`dates`](crate::dates).

use incident_types::{EnrichedRecord, Resolved, SENTINEL, SourceRecord};
use tracing::trace;

use crate::classify::classify;
use crate::dates::normalize;
use crate::text::collapse_whitespace;

/// Accepted source keys per logical field, preferred spelling first.
pub mod keys {
    pub const NAME: &[&str] = &["name", "Name"];
    pub const SEX: &[&str] = &["sex", "Sex"];
    pub const LOCATION: &[&str] = &["location", "Location"];
    pub const MANNER_OF_DEATH: &[&str] = &["manner_of_death", "Manner of Death"];
    pub const DESCRIPTION: &[&str] = &["detail_description", "Description"];
    pub const PERPETRATOR: &[&str] = &["perpetrator", "Perpetrator"];
    pub const STATUS_OF_CASE: &[&str] = &["status_of_case", "Status of Case"];
    pub const OCCUPATION: &[&str] = &["occupation", "Occupation"];
    pub const DATE_TEXT: &[&str] = &["date_of_incident_text", "Date of Incident"];
    pub const DATE_TIMESTAMP: &[&str] = &["date_of_incident_iso"];

    pub const ALL: &[&[&str]] = &[
        NAME,
        SEX,
        LOCATION,
        MANNER_OF_DEATH,
        DESCRIPTION,
        PERPETRATOR,
        STATUS_OF_CASE,
        OCCUPATION,
        DATE_TEXT,
        DATE_TIMESTAMP,
    ];
}

/// Columns of `record` that no output field reads, in column order.
pub fn unread_columns(record: &SourceRecord) -> Vec<&str> {
    record
        .keys()
        .filter(|k| !keys::ALL.iter().any(|spellings| spellings.contains(k)))
        .collect()
}

/// Normalized text of the first non-blank key, or empty.
fn field(record: &SourceRecord, keys: &[&str]) -> String {
    record
        .first_non_blank(keys)
        .map(collapse_whitespace)
        .unwrap_or_default()
}

fn or_unknown(value: String) -> String {
    if value.is_empty() {
        SENTINEL.to_string()
    } else {
        value
    }
}

/// Calendar-date part of a timestamp: its first ten characters.
fn timestamp_date_part(timestamp: &str) -> String {
    timestamp.trim().chars().take(10).collect()
}

/// Build the output row for one source row. Never fails; anything that
/// cannot be resolved is written as `"Unknown"` (or `""` for Description).
pub fn enrich(record: &SourceRecord) -> EnrichedRecord {
    let location = field(record, keys::LOCATION);
    let description = field(record, keys::DESCRIPTION);

    let timestamp = record.first_non_blank(keys::DATE_TIMESTAMP);
    let date_text = record.first_non_blank(keys::DATE_TEXT);

    let county = classify([Some(location.as_str()), Some(description.as_str())]);
    let date = normalize(timestamp, date_text);
    trace!(?county, ?date, "record enriched");

    // Prefer the human-written date; fall back to the timestamp's date part
    let date_of_incident = match (date_text, timestamp) {
        (Some(text), _) => collapse_whitespace(text),
        (None, Some(ts)) => timestamp_date_part(ts),
        (None, None) => String::new(),
    };

    EnrichedRecord {
        sex: or_unknown(field(record, keys::SEX)),
        location: or_unknown(location),
        manner_of_death: or_unknown(field(record, keys::MANNER_OF_DEATH)),
        perpetrator: or_unknown(field(record, keys::PERPETRATOR)),
        status_of_case: or_unknown(field(record, keys::STATUS_OF_CASE)),
        date_of_incident: or_unknown(date_of_incident),
        occupation: or_unknown(field(record, keys::OCCUPATION)),
        description,
        name: or_unknown(field(record, keys::NAME)),
        county: Resolved::from(county).map(|c| c.name().to_string()),
        year: Resolved::from(date.map(|d| d.year)),
        month: Resolved::from(date.map(|d| d.month_name().to_string())),
    }
}
