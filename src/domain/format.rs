//! Display formatting for validated numbers.

use super::landline::SEOUL_AREA_CODE;
use super::normalize::INTERNATIONAL_PREFIX;
use super::PhoneClass;

/// Re-inserts hyphens according to class and length.
///
/// | class    | digits | output          |
/// |----------|--------|-----------------|
/// | mobile   | 11     | `010-XXXX-XXXX` |
/// | mobile   | 10     | `01X-XXX-XXXX`  |
/// | landline | 9, 10  | `02-XXX(X)-XXXX`|
/// | landline | 10, 11 | `0XX-XXX(X)-XXXX` |
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter;

impl Formatter {
    fn prefix_len(normalized: &str, class: PhoneClass) -> Option<usize> {
        match class {
            PhoneClass::Mobile => Some(3),
            PhoneClass::Landline if normalized.starts_with(SEOUL_AREA_CODE) => Some(2),
            PhoneClass::Landline => Some(3),
            PhoneClass::Unknown => None,
        }
    }

    /// Formats a normalized domestic number.
    ///
    /// Returns `None` when the digits cannot be split into a prefix, a 3-4
    /// digit exchange and a 4 digit line number.
    pub fn format(normalized: &str, class: PhoneClass) -> Option<String> {
        if !normalized.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let prefix_len = Self::prefix_len(normalized, class)?;
        let exchange_len = normalized.len().checked_sub(prefix_len + 4)?;
        if !(3..=4).contains(&exchange_len) {
            return None;
        }

        let (prefix, rest) = normalized.split_at(prefix_len);
        let (exchange, line) = rest.split_at(exchange_len);
        Some(format!("{}-{}-{}", prefix, exchange, line))
    }

    /// Rewrites a domestic formatted number into `+82-` form.
    ///
    /// ```
    /// use kr_phone::domain::Formatter;
    ///
    /// assert_eq!(
    ///     Formatter::to_international("010-1234-5678").as_deref(),
    ///     Some("+82-10-1234-5678")
    /// );
    /// ```
    pub fn to_international(domestic: &str) -> Option<String> {
        domestic
            .strip_prefix('0')
            .map(|rest| format!("{}-{}", INTERNATIONAL_PREFIX, rest))
    }
}
