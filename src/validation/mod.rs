//! Validation service and convenience functions.
//!
//! [`PhoneValidator`] runs the full pipeline: required check, normalization,
//! the international branch, domestic pattern matching, carrier lookup,
//! fraud heuristics and formatting. The free functions in this module use a
//! shared default validator.

pub mod result;

pub use result::{InvalidPhoneNumber, PhoneNumber, ValidationResult};

use crate::domain::landline::SEOUL_AREA_CODE;
use crate::domain::{
    Formatter, FraudHeuristics, LandlineMatcher, MobileMatcher, Normalizer, PatternMatcher,
    PhoneClass, ValidationIssue,
};
use crate::error::{PhoneError, PhoneResult};
use crate::input;
use once_cell::sync::Lazy;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Configurable validation service.
///
/// The validator holds no mutable state and can be shared freely between
/// threads.
#[derive(Debug, Clone)]
pub struct PhoneValidator {
    heuristics: bool,
    carrier_labels: bool,
    repair_trunk_prefix: bool,
    mobile: MobileMatcher,
    landline: LandlineMatcher,
}

impl PhoneValidator {
    /// Creates a validator with heuristics and carrier labels enabled.
    pub fn new() -> Self {
        Self {
            heuristics: true,
            carrier_labels: true,
            repair_trunk_prefix: false,
            mobile: MobileMatcher::new(),
            landline: LandlineMatcher::new(),
        }
    }

    /// Enables or disables the fraud heuristics stage.
    pub fn with_heuristics(mut self, enabled: bool) -> Self {
        self.heuristics = enabled;
        self
    }

    /// Enables or disables the advisory carrier/region label.
    pub fn with_carrier_labels(mut self, enabled: bool) -> Self {
        self.carrier_labels = enabled;
        self
    }

    /// Restores a missing trunk `0` on domestic input before matching.
    pub fn with_trunk_prefix_repair(mut self, enabled: bool) -> Self {
        self.repair_trunk_prefix = enabled;
        self
    }

    fn matchers(&self) -> [&dyn PatternMatcher; 2] {
        [&self.mobile, &self.landline]
    }

    /// Validates a single raw phone string.
    ///
    /// Never fails: malformed input and internal faults are both reported
    /// through [`ValidationResult::errors`].
    ///
    /// ```
    /// use kr_phone::{PhoneClass, PhoneValidator};
    ///
    /// let validator = PhoneValidator::new();
    /// let result = validator.validate("+82-10-1234-5678");
    /// assert!(result.is_valid);
    /// assert_eq!(result.normalized, "01012345678");
    /// assert_eq!(result.formatted, "+82-10-1234-5678");
    /// assert_eq!(result.class, PhoneClass::Mobile);
    ///
    /// assert!(!validator.validate(None).is_valid);
    /// ```
    pub fn validate<'a>(&self, raw: impl Into<Option<&'a str>>) -> ValidationResult {
        let raw = raw.into();
        match self.run(raw) {
            Ok(result) => {
                if !result.is_valid {
                    debug!(
                        raw = ?raw.map(mask_digits),
                        errors = ?result.messages(),
                        "phone number rejected"
                    );
                }
                result
            }
            Err(err) => {
                warn!(
                    raw = ?raw.map(mask_digits),
                    error = %err,
                    "phone validation failed internally"
                );
                ValidationResult::internal_failure(raw.unwrap_or_default())
            }
        }
    }

    fn run(&self, raw: Option<&str>) -> PhoneResult<ValidationResult> {
        let raw = match raw {
            Some(raw) if !raw.trim().is_empty() => raw,
            other => {
                return Ok(ValidationResult::failure(
                    other.unwrap_or_default(),
                    PhoneClass::Unknown,
                    vec![ValidationIssue::required()],
                ))
            }
        };

        let international = Normalizer::is_international(raw);
        if international && !Normalizer::matches_international(raw) {
            return Ok(ValidationResult::failure(
                raw,
                PhoneClass::Unknown,
                vec![ValidationIssue::format(
                    "international numbers must be +82 followed by 9-10 digits (8-10 for Seoul)",
                )],
            ));
        }

        let mut normalized = Normalizer::normalize(raw);
        if self.repair_trunk_prefix && !international {
            normalized = Normalizer::repair_trunk_prefix(&normalized);
        }
        trace!(
            raw = %mask_digits(raw),
            normalized = %mask_digits(&normalized),
            international,
            "normalized phone number"
        );

        if normalized.is_empty() {
            return Ok(ValidationResult::failure(
                raw,
                PhoneClass::Unknown,
                vec![ValidationIssue::format("phone number contains no digits")],
            ));
        }
        if !normalized.chars().all(|c| c.is_ascii_digit()) {
            return Ok(ValidationResult::failure(
                raw,
                PhoneClass::Unknown,
                vec![ValidationIssue::format("phone number contains invalid characters")],
            ));
        }

        let (matcher, mut issues) = self.classify(&normalized);
        let class = matcher.map_or(PhoneClass::Unknown, |m| m.class());
        if !issues.is_empty() {
            return Ok(ValidationResult::failure(raw, class, issues));
        }

        let matcher = matcher
            .ok_or_else(|| PhoneError::internal("classifier", "no matcher for accepted number"))?;
        let segments = matcher.split(&normalized).ok_or_else(|| {
            PhoneError::internal("splitter", format!("cannot split {}", normalized))
        })?;

        if self.heuristics {
            issues.extend(FraudHeuristics::check(&normalized, class, &segments));
            if !issues.is_empty() {
                return Ok(ValidationResult::failure(raw, class, issues));
            }
        }

        let domestic = Formatter::format(&normalized, class).ok_or_else(|| {
            PhoneError::internal("formatter", format!("cannot format {} as {}", normalized, class))
        })?;
        let formatted = if international {
            Formatter::to_international(&domestic).ok_or_else(|| {
                PhoneError::internal("formatter", format!("no trunk prefix in {}", domestic))
            })?
        } else {
            domestic
        };

        let carrier = if self.carrier_labels {
            matcher.label(&normalized).map(str::to_string)
        } else {
            None
        };

        Ok(ValidationResult::success(
            raw,
            normalized,
            formatted,
            class,
            carrier,
            international,
        ))
    }

    /// Domestic checks: overall length, trunk prefix, class pattern and
    /// class length rules. All problems are accumulated.
    fn classify(
        &self,
        normalized: &str,
    ) -> (Option<&dyn PatternMatcher>, Vec<ValidationIssue>) {
        let mut issues = Vec::new();
        let len = normalized.len();

        // Seoul is the only area where a 9 digit number exists
        let seoul_short = len == 9 && normalized.starts_with(SEOUL_AREA_CODE);
        if !(10..=11).contains(&len) && !seoul_short {
            issues.push(ValidationIssue::length(format!(
                "phone numbers must be 10 or 11 digits, got {}",
                len
            )));
        }

        if !normalized.starts_with('0') {
            issues.push(ValidationIssue::format("domestic numbers must start with 0"));
        }

        let matcher = self
            .matchers()
            .into_iter()
            .find(|matcher| matcher.matches(normalized));

        match matcher {
            Some(matcher) => issues.extend(matcher.check_length(normalized)),
            None => issues.push(ValidationIssue::format("invalid format")),
        }

        (matcher, issues)
    }

    /// Validates every input independently.
    pub fn validate_batch<I, S>(&self, inputs: I) -> Vec<ValidationResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|raw| self.validate(raw.as_ref()))
            .collect()
    }

    /// Validates a file with one number per line, skipping blank lines.
    pub fn validate_file(&self, path: &Path) -> PhoneResult<Vec<ValidationResult>> {
        let lines = input::read_number_lines(path)?;
        debug!(lines = lines.len(), path = %path.display(), "validating file");
        Ok(self.validate_batch(&lines))
    }

    /// Finds phone-like substrings in free text and validates each one.
    ///
    /// Candidates are returned in text order; overlapping matches keep the
    /// earliest one.
    pub fn scan(&self, text: &str) -> Vec<ValidationResult> {
        let mut candidates: Vec<Range<usize>> = self
            .matchers()
            .into_iter()
            .flat_map(|matcher| matcher.find_spans(text))
            .collect();
        candidates.sort_unstable_by_key(|span| (span.start, span.end));

        let mut results = Vec::new();
        let mut last_end = 0;
        for span in candidates {
            if span.start < last_end {
                continue;
            }
            last_end = span.end;
            results.push(self.validate(&text[span]));
        }
        results
    }
}

impl Default for PhoneValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Hides all but the last four digits, for log output.
fn mask_digits(raw: &str) -> String {
    let total = raw.chars().filter(char::is_ascii_digit).count();
    let keep_from = total.saturating_sub(4);
    let mut seen = 0;

    raw.chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            seen += 1;
            if seen > keep_from {
                c
            } else {
                '*'
            }
        })
        .collect()
}

static DEFAULT_VALIDATOR: Lazy<PhoneValidator> = Lazy::new(PhoneValidator::new);

/// Validates with the default validator.
pub fn validate<'a>(raw: impl Into<Option<&'a str>>) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(raw)
}

pub fn validate_batch<I, S>(inputs: I) -> Vec<ValidationResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_VALIDATOR.validate_batch(inputs)
}

pub fn is_mobile_number(raw: &str) -> bool {
    validate(raw).is_mobile()
}

pub fn is_landline_number(raw: &str) -> bool {
    validate(raw).is_landline()
}

/// Normalized digits for a valid number, `None` otherwise.
pub fn get_normalized_phone_number(raw: &str) -> Option<String> {
    let result = validate(raw);
    result.is_valid.then_some(result.normalized)
}

/// Display form for a valid number, `None` otherwise.
pub fn get_formatted_phone_number(raw: &str) -> Option<String> {
    let result = validate(raw);
    result.is_valid.then_some(result.formatted)
}
