//! Free text → county.
//!
//! Two passes over the lowercased, space-joined input:
//!   1. canonical county names (optionally followed by "county"), longest
//!      name first;
//!   2. the alias table, in declaration order.
//!
//! Every pattern is anchored on word boundaries, so a short alias never
//! fires inside an unrelated longer word.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::counties::{ALIASES, County};

/// Which pass produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Canonical county name, with or without a trailing "county".
    Exact,
    /// Entry from the alias table.
    Alias,
}

/// A successful classification and the term that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountyMatch {
    pub county: County,
    pub kind: MatchKind,
    /// Canonical name for an exact match, the alias otherwise.
    pub term: &'static str,
}

struct CountyClassifier {
    exact: Vec<(County, Regex)>,
    aliases: Vec<(County, &'static str, Regex)>,
}

static CLASSIFIER: LazyLock<CountyClassifier> = LazyLock::new(CountyClassifier::new);

/// Whole-word pattern for a lowercase term.
fn word_regex(term: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(term))).expect("word regex")
}

/// Join the non-blank texts with single spaces and lowercase the result.
pub fn search_text<'a, I>(texts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    texts
        .into_iter()
        .flatten()
        .filter(|t| !t.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl CountyClassifier {
    fn new() -> Self {
        // Longest canonical name first; the stable sort keeps alphabetical
        // order among names of equal length.
        let mut by_length: Vec<County> = County::ALL.to_vec();
        by_length.sort_by_key(|c| std::cmp::Reverse(c.name().chars().count()));

        // {name} or {name} county, both whole-word
        let exact = by_length
            .into_iter()
            .map(|c| {
                let name = c.name().to_lowercase();
                let re = Regex::new(&format!(r"\b{}(?:\s+county)?\b", regex::escape(&name)))
                    .expect("county name regex");
                (c, re)
            })
            .collect();

        let aliases = ALIASES
            .iter()
            .map(|&(alias, c)| (c, alias, word_regex(alias)))
            .collect();

        CountyClassifier { exact, aliases }
    }

    /// Classify an already-lowercased search text.
    fn classify_text(&self, text: &str) -> Option<CountyMatch> {
        if text.is_empty() {
            return None;
        }

        for (county, re) in &self.exact {
            if re.is_match(text) {
                trace!(county = county.name(), "exact county name match");
                return Some(CountyMatch {
                    county: *county,
                    kind: MatchKind::Exact,
                    term: county.name(),
                });
            }
        }

        for (county, term, re) in &self.aliases {
            if re.is_match(text) {
                trace!(county = county.name(), alias = *term, "alias match");
                return Some(CountyMatch {
                    county: *county,
                    kind: MatchKind::Alias,
                    term: *term,
                });
            }
        }

        None
    }
}

/// Best county for the given texts, with the term that decided it.
pub fn classify_detailed<'a, I>(texts: I) -> Option<CountyMatch>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    CLASSIFIER.classify_text(&search_text(texts))
}

/// Best county for the given texts, or `None` if nothing matched.
pub fn classify<'a, I>(texts: I) -> Option<County>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    classify_detailed(texts).map(|m| m.county)
}
