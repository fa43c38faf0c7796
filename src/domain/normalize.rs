//! Normalization of user-supplied phone strings.
//!
//! Normalization strips display formatting and converts the `82` country
//! code into the domestic trunk prefix `0`. It never rejects input; it is
//! up to the matchers to decide whether the result is a phone number.

use once_cell::sync::Lazy;
use regex::Regex;

/// Korean country calling code.
pub const COUNTRY_CODE: &str = "82";

/// Prefix that marks a raw string as international input.
pub const INTERNATIONAL_PREFIX: &str = "+82";

/// Stateless helper for turning raw input into domestic digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Pattern for `+82` followed by 9-10 digits with optional hyphens.
    ///
    /// Seoul numbers drop to 8 digits once the trunk `0` is gone
    /// (`+82-2-739-2846`). A trunk `0` after the country code is rejected.
    /// Applied to the [`compact`](Self::compact) form of the raw input.
    pub fn international_pattern() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^\+82-?(?:2(?:-?\d){7,9}|[13-9](?:-?\d){8,9})$")
                .expect("Valid international phone regex")
        });
        &PATTERN
    }

    fn is_separator(c: char) -> bool {
        c.is_whitespace() || matches!(c, '-' | '.' | '(' | ')')
    }

    /// Strips separators and rewrites a leading `82` to `0`.
    ///
    /// ```
    /// use kr_phone::domain::Normalizer;
    ///
    /// assert_eq!(Normalizer::normalize("010-1234-5678"), "01012345678");
    /// assert_eq!(Normalizer::normalize("+82 (10) 1234.5678"), "01012345678");
    /// ```
    pub fn normalize(raw: &str) -> String {
        let stripped: String = raw.chars().filter(|&c| !Self::is_separator(c)).collect();
        let digits = stripped.strip_prefix('+').unwrap_or(&stripped);

        match digits.strip_prefix(COUNTRY_CODE) {
            Some(rest) => format!("0{}", rest),
            None => digits.to_string(),
        }
    }

    /// Removes whitespace, dots and parentheses but keeps hyphens and `+`.
    pub fn compact(raw: &str) -> String {
        raw.chars()
            .filter(|&c| !(c.is_whitespace() || matches!(c, '.' | '(' | ')')))
            .collect()
    }

    /// Returns true if the raw input is written in `+82` form.
    ///
    /// Checked on the compact form, so `+ 82` and `(+82)` count as well.
    pub fn is_international(raw: &str) -> bool {
        Self::compact(raw).starts_with(INTERNATIONAL_PREFIX)
    }

    /// Returns true if the international form of the raw input is well shaped.
    pub fn matches_international(raw: &str) -> bool {
        Self::international_pattern().is_match(&Self::compact(raw))
    }

    /// Restores a trunk `0` lost by spreadsheet exports.
    ///
    /// Only 9-10 digit strings whose first digit could follow the trunk
    /// prefix are repaired; anything else is returned unchanged.
    pub fn repair_trunk_prefix(normalized: &str) -> String {
        let repairable = (9..=10).contains(&normalized.len())
            && normalized.chars().all(|c| c.is_ascii_digit())
            && normalized
                .chars()
                .next()
                .is_some_and(|c| ('1'..='6').contains(&c));

        if repairable {
            format!("0{}", normalized)
        } else {
            normalized.to_string()
        }
    }
}
