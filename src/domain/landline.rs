//! Landline number rules and area-code regions.

use super::{PatternMatcher, PhoneClass, ValidationIssue};
use once_cell::sync::Lazy;
use regex::Regex;

/// Seoul's area code, the only 2-digit one.
pub const SEOUL_AREA_CODE: &str = "02";

/// Area code to region table.
pub const REGION_LABELS: &[(&str, &str)] = &[
    ("02", "Seoul"),
    ("031", "Gyeonggi"),
    ("032", "Incheon"),
    ("033", "Gangwon"),
    ("041", "Chungnam"),
    ("042", "Daejeon"),
    ("043", "Chungbuk"),
    ("044", "Sejong"),
    ("051", "Busan"),
    ("052", "Ulsan"),
    ("053", "Daegu"),
    ("054", "Gyeongbuk"),
    ("055", "Gyeongnam"),
    ("061", "Jeonnam"),
    ("062", "Gwangju"),
    ("063", "Jeonbuk"),
    ("064", "Jeju"),
];

/// Matcher for geographic landline numbers.
///
/// Seoul numbers use `02` followed by 7-8 digits. Every other region uses a
/// 3-digit `0[3-6]X` area code followed by 7-8 digits.
#[derive(Debug, Clone, Default)]
pub struct LandlineMatcher;

impl LandlineMatcher {
    /// Creates a new landline matcher.
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^(02|0[3-6][1-9])(\d{3,4})(\d{4})$").expect("Valid landline number regex")
        });
        &PATTERN
    }

    fn search_regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(?:\+82[-.\s]?|0)(?:2|[3-6][1-9])\)?[-.\s]?\d{3,4}[-.\s]?\d{4}")
                .expect("Valid landline search regex")
        });
        &PATTERN
    }

    /// Returns the area code of a normalized landline number.
    pub fn area_code(normalized: &str) -> Option<&str> {
        if normalized.starts_with(SEOUL_AREA_CODE) {
            normalized.get(..2)
        } else {
            normalized.get(..3)
        }
    }

    /// Minimum digit count for an area code.
    pub fn minimum_length(area_code: &str) -> usize {
        if area_code == SEOUL_AREA_CODE {
            9
        } else {
            10
        }
    }

    pub fn region_for_area_code(area_code: &str) -> Option<&'static str> {
        REGION_LABELS
            .iter()
            .find(|(code, _)| *code == area_code)
            .map(|(_, region)| *region)
    }
}

impl PatternMatcher for LandlineMatcher {
    fn class(&self) -> PhoneClass {
        PhoneClass::Landline
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn search_pattern(&self) -> &Regex {
        Self::search_regex()
    }

    fn check_length(&self, normalized: &str) -> Option<ValidationIssue> {
        let area_code = Self::area_code(normalized)?;
        let minimum = Self::minimum_length(area_code);

        if normalized.len() >= minimum {
            None
        } else {
            Some(ValidationIssue::length(format!(
                "landline numbers with area code {} need at least {} digits, got {}",
                area_code,
                minimum,
                normalized.len()
            )))
        }
    }

    fn label(&self, normalized: &str) -> Option<&'static str> {
        Self::area_code(normalized).and_then(Self::region_for_area_code)
    }
}
