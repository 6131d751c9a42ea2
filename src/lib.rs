//! Incident record enrichment.
//!
//! Turns loosely formatted incident rows (free-text location, description and
//! date fields) into fixed-shape records with an inferred Kenyan county and a
//! numeric year plus month name.
//!
//! ```text
//! counties ──► classify ──┐
//!                         ├──► enrich ──► convert (CSV → JSON Lines)
//! months ────► dates ─────┘
//! ```
//!
//! Everything up to [`enrich`] is pure and infallible; the lookup tables are
//! built once and shared read-only, so rows can be enriched from any number
//! of threads. File handling lives in [`convert`].

pub mod classify;
pub mod convert;
pub mod counties;
pub mod dates;
pub mod enrich;
pub mod error;
pub mod months;
pub mod text;

pub use classify::classify;
pub use counties::County;
pub use dates::{YearMonth, normalize};
pub use enrich::enrich;
pub use error::{Error, Result};
pub use incident_types::{EnrichedRecord, Resolved, SENTINEL, SourceRecord};
