//! Mobile number rules.
//!
//! Mobile numbers start with `01X`. Since 2004 new subscriptions are issued
//! on `010` only (11 digits); the legacy prefixes survive on 10-digit
//! numbers.

use super::{PatternMatcher, PhoneClass, ValidationIssue};
use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix shared by all current mobile subscriptions.
pub const UNIFIED_PREFIX: &str = "010";

/// Prefix to carrier table.
///
/// Number portability means a subscriber keeps the prefix when switching
/// carriers, so these labels only describe who originally issued it.
pub const CARRIER_LABELS: &[(&str, &str)] = &[
    ("010", "Mobile (All Carriers)"),
    ("011", "SK Telecom"),
    ("016", "KT"),
    ("017", "SK Telecom"),
    ("018", "KT"),
    ("019", "LG U+"),
];

/// Matcher for `01X` mobile numbers.
#[derive(Debug, Clone, Default)]
pub struct MobileMatcher;

impl MobileMatcher {
    /// Creates a new mobile matcher.
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^(01[0-9])(\d{3,4})(\d{4})$").expect("Valid mobile number regex")
        });
        &PATTERN
    }

    fn search_regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(?:\+82[-.\s]?|0)1[0-9][-.\s]?\d{3,4}[-.\s]?\d{4}")
                .expect("Valid mobile search regex")
        });
        &PATTERN
    }

    /// Expected total digit count for a mobile prefix.
    pub fn expected_length(prefix: &str) -> usize {
        if prefix == UNIFIED_PREFIX {
            11
        } else {
            10
        }
    }

    /// Looks up the advisory carrier label for a 3-digit prefix.
    pub fn carrier_for_prefix(prefix: &str) -> Option<&'static str> {
        CARRIER_LABELS
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, label)| *label)
    }
}

impl PatternMatcher for MobileMatcher {
    fn class(&self) -> PhoneClass {
        PhoneClass::Mobile
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn search_pattern(&self) -> &Regex {
        Self::search_regex()
    }

    fn check_length(&self, normalized: &str) -> Option<ValidationIssue> {
        let prefix = normalized.get(..3)?;
        let expected = Self::expected_length(prefix);

        if normalized.len() == expected {
            None
        } else {
            Some(ValidationIssue::length(format!(
                "mobile numbers starting with {} must be {} digits, got {}",
                prefix,
                expected,
                normalized.len()
            )))
        }
    }

    fn label(&self, normalized: &str) -> Option<&'static str> {
        normalized.get(..3).and_then(Self::carrier_for_prefix)
    }
}
