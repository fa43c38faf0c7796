//! Validation result and validated phone number types.

use crate::domain::{Formatter, IssueKind, PhoneClass, ValidationIssue};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Outcome of validating one raw phone string.
///
/// Failures are reported through `errors`; `normalized` and `formatted`
/// are empty unless `is_valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Input as supplied by the caller
    pub raw: String,

    pub is_valid: bool,

    /// Domestic digits, e.g. `01012345678`
    pub normalized: String,

    /// Display form, e.g. `010-1234-5678` or `+82-10-1234-5678`
    pub formatted: String,

    /// Advisory carrier (mobile) or region (landline) label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,

    /// Detected class; set even when a later stage rejected the number
    pub class: PhoneClass,

    pub errors: Vec<ValidationIssue>,

    /// Whether the input was written in `+82` form
    #[serde(default)]
    pub international: bool,
}

impl ValidationResult {
    pub(crate) fn success(
        raw: &str,
        normalized: String,
        formatted: String,
        class: PhoneClass,
        carrier: Option<String>,
        international: bool,
    ) -> Self {
        Self {
            raw: raw.to_string(),
            is_valid: true,
            normalized,
            formatted,
            carrier,
            class,
            errors: Vec::new(),
            international,
        }
    }

    pub(crate) fn failure(raw: &str, class: PhoneClass, errors: Vec<ValidationIssue>) -> Self {
        Self {
            raw: raw.to_string(),
            class,
            errors,
            international: crate::domain::Normalizer::is_international(raw),
            ..Default::default()
        }
    }

    /// Result reported when the pipeline itself failed.
    pub(crate) fn internal_failure(raw: &str) -> Self {
        Self::failure(raw, PhoneClass::Unknown, vec![ValidationIssue::internal()])
    }

    /// Returns true if any error has the given kind.
    pub fn has_issue(&self, kind: IssueKind) -> bool {
        self.errors.iter().any(|issue| issue.kind == kind)
    }

    pub fn is_mobile(&self) -> bool {
        self.is_valid && self.class == PhoneClass::Mobile
    }

    pub fn is_landline(&self) -> bool {
        self.is_valid && self.class == PhoneClass::Landline
    }

    /// Error messages in order, as plain strings.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|issue| issue.message.clone()).collect()
    }

    /// Converts a successful result into a [`PhoneNumber`].
    pub fn into_phone_number(self) -> Result<PhoneNumber, InvalidPhoneNumber> {
        if !self.is_valid {
            return Err(InvalidPhoneNumber {
                raw: self.raw,
                errors: self.errors,
            });
        }

        Ok(PhoneNumber {
            raw: self.raw,
            normalized: self.normalized,
            class: self.class,
            carrier_label: self.carrier,
            international: self.international,
        })
    }
}

/// Error returned when a raw string does not validate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid phone number '{raw}': {}", summarize(.errors))]
pub struct InvalidPhoneNumber {
    pub raw: String,
    pub errors: Vec<ValidationIssue>,
}

fn summarize(errors: &[ValidationIssue]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A validated Korean phone number.
///
/// Only obtainable through validation. The formatted form is derived from
/// the normalized digits on demand. Serializes as the normalized digits and
/// re-validates when deserialized.
///
/// ```
/// use kr_phone::PhoneNumber;
///
/// let phone: PhoneNumber = "010 1234 5678".parse().unwrap();
/// assert_eq!(phone.normalized(), "01012345678");
/// assert_eq!(phone.formatted(), "010-1234-5678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    raw: String,
    normalized: String,
    class: PhoneClass,
    carrier_label: Option<String>,
    international: bool,
}

impl PhoneNumber {
    /// Validates `raw` with the default validator.
    pub fn parse(raw: &str) -> Result<Self, InvalidPhoneNumber> {
        super::validate(raw).into_phone_number()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Display form; `+82-` form if the number was entered internationally.
    pub fn formatted(&self) -> String {
        let domestic = match Formatter::format(&self.normalized, self.class) {
            Some(formatted) => formatted,
            None => return self.normalized.clone(),
        };

        if self.international {
            Formatter::to_international(&domestic).unwrap_or(domestic)
        } else {
            domestic
        }
    }

    /// Domestic display form regardless of how the number was entered.
    pub fn domestic(&self) -> String {
        Formatter::format(&self.normalized, self.class).unwrap_or_else(|| self.normalized.clone())
    }

    pub fn class(&self) -> PhoneClass {
        self.class
    }

    pub fn carrier_label(&self) -> Option<&str> {
        self.carrier_label.as_deref()
    }

    pub fn is_mobile(&self) -> bool {
        self.class == PhoneClass::Mobile
    }

    pub fn is_landline(&self) -> bool {
        self.class == PhoneClass::Landline
    }

    pub fn into_inner(self) -> String {
        self.normalized
    }
}

impl FromStr for PhoneNumber {
    type Err = InvalidPhoneNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.normalized.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}
