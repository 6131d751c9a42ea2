//! Heterogeneous date fields → (year, month).
//!
//! Attempts, first success wins:
//!   1. structured timestamp (`2025-06-20`, `20250620`, `2025-06-20T08:30:00Z`, ...)
//!   2. free text "day month year" (`20 June, 2025`, `20 Jun 2025`)
//!   3. free text "month year" (`February 2023`)
//!   4. free text "year-month" / "year/month" (`2024-11`, `2024/3`)
//!
//! A failed attempt is never an error; it only means "try the next one".

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use tracing::{debug, trace};

use crate::months::{MONTH_NAMES, month_number};
use crate::text::collapse_whitespace;

// ── Result type ──────────────────────────────────────────────────────

/// A calendar year and month. `month` is always in 1–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(YearMonth { year, month })
    }

    /// Canonical English month name, e.g. "June".
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    fn from_date(d: impl Datelike) -> Self {
        YearMonth {
            year: d.year(),
            month: d.month(),
        }
    }
}

/// Which attempt produced a [`YearMonth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Timestamp,
    DayMonthYear,
    MonthYear,
    YearMonth,
}

// ── Patterns ─────────────────────────────────────────────────────────

// Extended (2025-06-20) or basic (20250620) calendar date, optionally
// followed by `T` or a space and a time: hour, then optional minutes,
// seconds and fraction, then an optional zone offset. A trailing `Z` is
// rewritten to `+00:00` before matching.
static RE_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:(?P<y>[0-9]{4})-(?P<m>[0-9]{2})-(?P<d>[0-9]{2})",
        r"|(?P<by>[0-9]{4})(?P<bm>[0-9]{2})(?P<bd>[0-9]{2}))",
        r"(?:[T ](?P<hh>[0-9]{2})",
        r"(?::?(?P<mi>[0-9]{2})(?::?(?P<ss>[0-9]{2})(?P<frac>[.,][0-9]{1,9})?)?)?",
        r"(?:(?P<oh>[+-][0-9]{2}):?(?P<om>[0-9]{2}))?)?$",
    ))
    .unwrap()
});

// Canonical forms the timestamp is rewritten to before chrono sees it
const TIMESTAMP_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const TIMESTAMP_OFFSET_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

// {d} {month} {yyyy}, the whole cleaned text
static RE_DAY_MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2} [A-Za-z]+ [0-9]{4}$").unwrap());

// "20 June 2025", then "20 Jun 2025"
const DAY_MONTH_YEAR_LAYOUTS: &[&str] = &["%d %B %Y", "%d %b %Y"];

// {word} {yyyy}
static RE_MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z]+)\s+([0-9]{4})\b").unwrap());

// {yyyy}-{m} or {yyyy}/{m}
static RE_YEAR_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{4})[-/]([0-9]{1,2})\b").unwrap());

// ── Attempts ─────────────────────────────────────────────────────────

/// Parse a structured calendar timestamp.
///
/// The date needs a 4-digit year and 2-digit month and day. Missing
/// minutes and seconds count as zero; the calendar and clock values are
/// then validated by chrono.
pub fn parse_timestamp(raw: &str) -> Option<YearMonth> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let s = match s.strip_suffix('Z') {
        Some(head) => format!("{head}+00:00"),
        None => s.to_string(),
    };

    let caps = RE_TIMESTAMP.captures(&s)?;
    let part = |extended: &str, basic: &str| {
        caps.name(extended)
            .or_else(|| caps.name(basic))
            .map_or("", |m| m.as_str())
    };
    let date = format!("{}-{}-{}", part("y", "by"), part("m", "bm"), part("d", "bd"));

    let Some(hour) = caps.name("hh") else {
        return NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .ok()
            .map(YearMonth::from_date);
    };
    let field = |name: &str| caps.name(name).map_or("00", |m| m.as_str());
    let frac = caps
        .name("frac")
        .map(|m| m.as_str().replace(',', "."))
        .unwrap_or_default();
    let local = format!(
        "{date}T{}:{}:{}{frac}",
        hour.as_str(),
        field("mi"),
        field("ss")
    );

    match (caps.name("oh"), caps.name("om")) {
        (Some(oh), Some(om)) => {
            let stamped = format!("{local}{}:{}", oh.as_str(), om.as_str());
            DateTime::parse_from_str(&stamped, TIMESTAMP_OFFSET_LAYOUT)
                .ok()
                .map(YearMonth::from_date)
        }
        _ => NaiveDateTime::parse_from_str(&local, TIMESTAMP_LAYOUT)
            .ok()
            .map(YearMonth::from_date),
    }
}

/// Commas become spaces, whitespace runs collapse, ends are trimmed.
pub fn clean_free_text(text: &str) -> String {
    collapse_whitespace(&text.replace(',', " "))
}

/// "20 June 2025" / "20 Jun 2025". The whole (cleaned) text must be the date.
fn parse_day_month_year(text: &str) -> Option<YearMonth> {
    if !RE_DAY_MONTH_YEAR.is_match(text) {
        return None;
    }
    DAY_MONTH_YEAR_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(text, layout).ok())
        .map(YearMonth::from_date)
}

/// First `{word} {yyyy}` in the text, if the word is a full month name.
fn parse_month_year(text: &str) -> Option<YearMonth> {
    let caps = RE_MONTH_YEAR.captures(text)?;
    let month = month_number(&caps[1])?;
    let year = caps[2].parse().ok()?;
    YearMonth::new(year, month)
}

/// First `{yyyy}-{m}` or `{yyyy}/{m}` in the text, if `m` is 1–12.
fn parse_year_month(text: &str) -> Option<YearMonth> {
    let caps = RE_YEAR_MONTH.captures(text)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    YearMonth::new(year, month)
}

const FREE_TEXT_ATTEMPTS: &[(DateSource, fn(&str) -> Option<YearMonth>)] = &[
    (DateSource::DayMonthYear, parse_day_month_year),
    (DateSource::MonthYear, parse_month_year),
    (DateSource::YearMonth, parse_year_month),
];

// ── Entry points ─────────────────────────────────────────────────────

/// Like [`normalize`], also reporting which attempt succeeded.
pub fn normalize_detailed(
    timestamp: Option<&str>,
    text: Option<&str>,
) -> Option<(YearMonth, DateSource)> {
    if let Some(ts) = timestamp {
        match parse_timestamp(ts) {
            Some(ym) => return Some((ym, DateSource::Timestamp)),
            None if !ts.trim().is_empty() => {
                debug!(timestamp = ts, "unparseable timestamp, falling back to free text");
            }
            None => {}
        }
    }

    let cleaned = clean_free_text(text.unwrap_or(""));
    if cleaned.is_empty() {
        return None;
    }

    for (source, attempt) in FREE_TEXT_ATTEMPTS {
        if let Some(ym) = attempt(&cleaned) {
            trace!(?source, text = %cleaned, "date resolved");
            return Some((ym, *source));
        }
    }

    debug!(text = %cleaned, "no year/month found in date text");
    None
}

/// Extract a (year, month) from a structured timestamp and/or free text.
///
/// The timestamp always wins when it parses, even if the free text says
/// something different.
pub fn normalize(timestamp: Option<&str>, text: Option<&str>) -> Option<YearMonth> {
    normalize_detailed(timestamp, text).map(|(ym, _)| ym)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> Option<YearMonth> {
        YearMonth::new(year, month)
    }

    // ── YearMonth ────────────────────────────────────────────────────

    #[test]
    fn test_year_month_rejects_bad_month() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
        assert_eq!(YearMonth::new(2024, 11).unwrap().month_name(), "November");
    }

    // ── timestamps ───────────────────────────────────────────────────

    #[test]
    fn test_timestamp_utc_z() {
        assert_eq!(parse_timestamp("2025-06-20T00:00:00Z"), ym(2025, 6));
    }

    #[test]
    fn test_timestamp_variants() {
        assert_eq!(parse_timestamp("2025-06-20"), ym(2025, 6));
        assert_eq!(parse_timestamp("2023-02-01T14:05:09+03:00"), ym(2023, 2));
        assert_eq!(parse_timestamp("2023-02-01 14:05:09"), ym(2023, 2));
        assert_eq!(parse_timestamp("2023-12-31T23:59:59.123Z"), ym(2023, 12));
        assert_eq!(parse_timestamp("2021-07-04T10:30"), ym(2021, 7));
        assert_eq!(parse_timestamp(" 2025-01-02 "), ym(2025, 1));
    }

    #[test]
    fn test_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("June 2025"), None);
        assert_eq!(parse_timestamp("2025-13-01"), None);
        assert_eq!(parse_timestamp("2025-02-30"), None);
    }

    #[test]
    fn test_timestamp_requires_four_digit_year() {
        assert_eq!(parse_timestamp("25-06-20"), None);
        assert_eq!(parse_timestamp("5-06-20T10:00"), None);
        assert_eq!(normalize_detailed(Some("25-06-20"), None), None);
    }

    #[test]
    fn test_timestamp_requires_padded_fields() {
        assert_eq!(parse_timestamp("2025-6-2"), None);
        assert_eq!(parse_timestamp("2025-06-2"), None);
        assert_eq!(parse_timestamp("2025-6-20"), None);
        assert_eq!(parse_timestamp("2025-06-20T1:00"), None);
        assert_eq!(parse_timestamp("2025-06-20T10:5"), None);
    }

    #[test]
    fn test_timestamp_hour_only() {
        assert_eq!(parse_timestamp("2025-06-20T10"), ym(2025, 6));
        assert_eq!(parse_timestamp("2025-06-20 10"), ym(2025, 6));
        assert_eq!(parse_timestamp("2025-06-20T10Z"), ym(2025, 6));
        assert_eq!(parse_timestamp("2025-06-20T10+03:00"), ym(2025, 6));
    }

    #[test]
    fn test_timestamp_basic_format() {
        assert_eq!(parse_timestamp("20250620"), ym(2025, 6));
        assert_eq!(parse_timestamp("20250620T103000"), ym(2025, 6));
        assert_eq!(parse_timestamp("20231231T2359+0300"), ym(2023, 12));
        assert_eq!(parse_timestamp("20251320"), None);
        assert_eq!(parse_timestamp("2025062"), None);
    }

    #[test]
    fn test_timestamp_offset_and_fraction_forms() {
        assert_eq!(parse_timestamp("2023-02-01T14:05:09+0300"), ym(2023, 2));
        assert_eq!(parse_timestamp("2023-02-01T14:05:09,5"), ym(2023, 2));
        assert_eq!(parse_timestamp("2023-02-01T14:05-05:00"), ym(2023, 2));
        // offset without a time of day
        assert_eq!(parse_timestamp("2023-02-01+03:00"), None);
    }

    #[test]
    fn test_timestamp_rejects_out_of_range_clock() {
        assert_eq!(parse_timestamp("2025-06-20T25"), None);
        assert_eq!(parse_timestamp("2025-06-20T10:61"), None);
        assert_eq!(parse_timestamp("2025-06-20T10:00+3:00"), None);
    }

    #[test]
    fn test_timestamp_wins_over_free_text() {
        let r = normalize_detailed(Some("2025-06-20T00:00:00Z"), Some("3 March 2019"));
        assert_eq!(r, Some((ym(2025, 6).unwrap(), DateSource::Timestamp)));
    }

    #[test]
    fn test_bad_timestamp_falls_back_to_text() {
        let r = normalize(Some("not a date"), Some("February 2023"));
        assert_eq!(r, ym(2023, 2));
    }

    // ── day month year ───────────────────────────────────────────────

    #[test]
    fn test_day_month_year_with_comma() {
        let r = normalize_detailed(None, Some("20 June, 2025"));
        assert_eq!(r, Some((ym(2025, 6).unwrap(), DateSource::DayMonthYear)));
    }

    #[test]
    fn test_day_abbrev_month_year() {
        assert_eq!(normalize(None, Some("20 Jun 2025")), ym(2025, 6));
        assert_eq!(normalize(None, Some("  5   sep   2019 ")), ym(2019, 9));
        assert_eq!(normalize(None, Some("20 JUNE 2025")), ym(2025, 6));
    }

    #[test]
    fn test_day_month_year_requires_four_digit_year() {
        assert_eq!(normalize_detailed(None, Some("20 June 25")), None);
        assert_eq!(normalize_detailed(None, Some("5 Jun 7")), None);
        assert_eq!(normalize(None, Some("20 June 202")), None);
    }

    #[test]
    fn test_day_month_year_requires_spaces() {
        assert_eq!(normalize_detailed(None, Some("20June2025")), None);
        assert_eq!(normalize_detailed(None, Some("20 June2025")), None);
    }

    #[test]
    fn test_day_month_year_rejects_three_digit_day() {
        // falls through to "June 2025"
        let r = normalize_detailed(None, Some("120 June 2025"));
        assert_eq!(r, Some((ym(2025, 6).unwrap(), DateSource::MonthYear)));
    }

    #[test]
    fn test_invalid_calendar_day_falls_through() {
        // 31 February cannot be a date; "February 2023" still yields the month
        let r = normalize_detailed(None, Some("31 February 2023"));
        assert_eq!(r, Some((ym(2023, 2).unwrap(), DateSource::MonthYear)));
    }

    // ── month year ───────────────────────────────────────────────────

    #[test]
    fn test_month_year() {
        let r = normalize_detailed(None, Some("February 2023"));
        assert_eq!(r, Some((ym(2023, 2).unwrap(), DateSource::MonthYear)));
        assert_eq!(normalize(None, Some("sometime in march 2020")), ym(2020, 3));
        assert_eq!(normalize(None, Some("March 2020, Nairobi")), ym(2020, 3));
    }

    #[test]
    fn test_month_year_only_first_candidate_counts() {
        // "in 2020" is the first word+year pair and "in" is not a month
        assert_eq!(normalize(None, Some("died in 2020 not March 2021")), None);
    }

    #[test]
    fn test_month_year_rejects_abbreviation() {
        assert_eq!(normalize(None, Some("Feb 2023")), None);
    }

    // ── year month ───────────────────────────────────────────────────

    #[test]
    fn test_year_dash_month() {
        let r = normalize_detailed(None, Some("2024-11"));
        assert_eq!(r, Some((ym(2024, 11).unwrap(), DateSource::YearMonth)));
    }

    #[test]
    fn test_year_slash_month() {
        assert_eq!(normalize(None, Some("2024/3")), ym(2024, 3));
    }

    #[test]
    fn test_year_month_out_of_range() {
        assert_eq!(normalize(None, Some("2024-13")), None);
        assert_eq!(normalize(None, Some("2024-00")), None);
    }

    // ── nothing ──────────────────────────────────────────────────────

    #[test]
    fn test_absent_inputs() {
        assert_eq!(normalize(None, None), None);
        assert_eq!(normalize(Some(""), Some("   ")), None);
        assert_eq!(normalize(None, Some("Unknown")), None);
    }
}
