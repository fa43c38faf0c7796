//! Domain models and business rules for Korean phone numbers.
//!
//! This module contains the leaf components of the validation pipeline:
//! normalization, per-class pattern matching, carrier/region lookup,
//! fraud heuristics and display formatting.

pub mod format;
pub mod heuristics;
pub mod issue;
pub mod landline;
pub mod mobile;
pub mod normalize;

pub use format::Formatter;
pub use heuristics::FraudHeuristics;
pub use issue::{IssueKind, ValidationIssue};
pub use landline::LandlineMatcher;
pub use mobile::MobileMatcher;
pub use normalize::Normalizer;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Classification of a normalized number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneClass {
    Mobile,
    Landline,
    #[default]
    Unknown,
}

impl fmt::Display for PhoneClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mobile => "mobile",
            Self::Landline => "landline",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Normalized number split into its display segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    /// Mobile prefix or area code, including the trunk `0`
    pub prefix: &'a str,
    /// Exchange (3 or 4 digits)
    pub exchange: &'a str,
    /// Line number (4 digits)
    pub line: &'a str,
}

impl Segments<'_> {
    /// Digits after the prefix.
    pub fn subscriber(&self) -> String {
        format!("{}{}", self.exchange, self.line)
    }
}

/// Rules for one class of Korean phone number.
///
/// [`pattern`] is anchored, runs on normalized digits and captures prefix,
/// exchange and line. [`search_pattern`] finds formatted candidates inside
/// free text; it carries no boundaries of its own, see [`find_spans`].
///
/// [`pattern`]: PatternMatcher::pattern
/// [`search_pattern`]: PatternMatcher::search_pattern
/// [`find_spans`]: PatternMatcher::find_spans
pub trait PatternMatcher: Send + Sync {
    fn class(&self) -> PhoneClass;
    fn pattern(&self) -> &Regex;
    fn search_pattern(&self) -> &Regex;

    /// Returns a length issue when the digit count does not fit the prefix.
    fn check_length(&self, normalized: &str) -> Option<ValidationIssue>;

    /// Advisory carrier or region label for the prefix.
    fn label(&self, normalized: &str) -> Option<&'static str>;

    fn matches(&self, normalized: &str) -> bool {
        self.pattern().is_match(normalized)
    }

    fn split<'a>(&self, normalized: &'a str) -> Option<Segments<'a>> {
        let caps = self.pattern().captures(normalized)?;
        Some(Segments {
            prefix: caps.get(1)?.as_str(),
            exchange: caps.get(2)?.as_str(),
            line: caps.get(3)?.as_str(),
        })
    }

    /// Byte ranges of candidates in free text, in text order.
    ///
    /// A candidate glued to further digits is part of a longer number and
    /// is dropped. Letters of any script may touch it, since Korean text
    /// attaches particles and labels without a space (`010-1234-5678로`).
    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.search_pattern()
            .find_iter(text)
            .map(|m| m.range())
            .filter(|span| !touches_digit(text, span))
            .collect()
    }

    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.find_spans(text)
            .into_iter()
            .map(|span| &text[span])
            .collect()
    }
}

fn touches_digit(text: &str, span: &Range<usize>) -> bool {
    let before = text[..span.start].chars().next_back();
    let after = text[span.end..].chars().next();
    before.is_some_and(|c| c.is_ascii_digit()) || after.is_some_and(|c| c.is_ascii_digit())
}
