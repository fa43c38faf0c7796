//! Fraud heuristics for numbers that are well formed but implausible.
//!
//! These checks catch the values people type to get past a sign-up form:
//! keypad runs, repeated digits and well-known placeholder numbers.

use super::{PhoneClass, Segments, ValidationIssue};

/// Mobile prefixes that were ever issued to subscribers.
pub const KNOWN_MOBILE_PREFIXES: [&str; 6] = ["010", "011", "016", "017", "018", "019"];

/// Placeholder and test numbers seen in sign-up data.
pub const KNOWN_TEST_NUMBERS: &[&str] = &[
    "0000000000",
    "00000000000",
    "01000000000",
    "01011111111",
    "01012341234",
    "01056785678",
    "01099999999",
    "01100000000",
    "0200000000",
    "0211111111",
];

/// Length of a digit run that counts as sequential or repeated.
pub const RUN_LENGTH: usize = 4;

/// Occurrences of one digit that count as repeated.
pub const MAX_DIGIT_OCCURRENCES: usize = 6;

/// Stateless collection of fraud checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FraudHeuristics;

impl FraudHeuristics {
    /// Runs every heuristic and returns all issues found.
    pub fn check(
        normalized: &str,
        class: PhoneClass,
        segments: &Segments<'_>,
    ) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if Self::has_sequential_run(&segments.subscriber()) {
            issues.push(ValidationIssue::heuristic(
                "subscriber number contains a sequential digit run",
            ));
        }

        if Self::has_repeated_digits(normalized) {
            issues.push(ValidationIssue::heuristic("number contains too many repeated digits"));
        }

        if Self::is_known_test_number(normalized) {
            issues.push(ValidationIssue::heuristic("number is a known test number"));
        }

        if class == PhoneClass::Mobile && !Self::has_known_mobile_prefix(normalized) {
            issues.push(ValidationIssue::heuristic(format!(
                "{} is not an issued mobile prefix",
                segments.prefix
            )));
        }

        issues
    }

    /// Detects keypad runs in the subscriber digits.
    ///
    /// A window of [`RUN_LENGTH`] digits is sequential when it counts down
    /// (`9876`, `4321`) or counts up starting from zero (`0123`). Upward
    /// runs from other digits occur in ordinary numbers, including the
    /// `1234-5678` sample used throughout Korean documentation.
    ///
    /// The rule is intentionally asymmetric: `010-9876-2846` is rejected
    /// while `010-6789-2846` passes.
    pub fn has_sequential_run(subscriber: &str) -> bool {
        let digits: Vec<i8> = subscriber
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| (b - b'0') as i8)
            .collect();

        digits.windows(RUN_LENGTH).any(|window| {
            let descending = window.windows(2).all(|pair| pair[1] == pair[0] - 1);
            let ascending_from_zero =
                window[0] == 0 && window.windows(2).all(|pair| pair[1] == pair[0] + 1);
            descending || ascending_from_zero
        })
    }

    /// Detects a digit used [`MAX_DIGIT_OCCURRENCES`] times or a constant run.
    pub fn has_repeated_digits(normalized: &str) -> bool {
        let bytes = normalized.as_bytes();

        let mut counts = [0usize; 10];
        for b in bytes.iter().filter(|b| b.is_ascii_digit()) {
            counts[(b - b'0') as usize] += 1;
        }
        if counts.iter().any(|&count| count >= MAX_DIGIT_OCCURRENCES) {
            return true;
        }

        bytes
            .windows(RUN_LENGTH)
            .any(|window| window.iter().all(|&b| b == window[0]))
    }

    pub fn is_known_test_number(normalized: &str) -> bool {
        KNOWN_TEST_NUMBERS.contains(&normalized)
    }

    pub fn has_known_mobile_prefix(normalized: &str) -> bool {
        KNOWN_MOBILE_PREFIXES
            .iter()
            .any(|prefix| normalized.starts_with(prefix))
    }
}
